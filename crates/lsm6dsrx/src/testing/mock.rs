extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};
use crate::monitor::SerialTx;

/// One bus transaction seen by the mock, in issue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transaction {
    Read(u8),
    Write(u8, u8),
}

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    scripted: Vec<(u8, VecDeque<u8>)>,
    self_clearing: Vec<(u8, u8)>,
    failing_reads: Vec<u8>,
    writes: Vec<(u8, u8)>,
    reads: Vec<u8>,
    transactions: Vec<Transaction>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            scripted: Vec::new(),
            self_clearing: Vec::new(),
            failing_reads: Vec::new(),
            writes: Vec::new(),
            reads: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    /// Queues values returned by successive reads of `reg` before falling
    /// back to the stored register value.
    pub(crate) fn with_script(mut self, reg: u8, values: &[u8]) -> Self {
        self.scripted.push((reg, values.iter().copied().collect()));
        self
    }

    /// Bits in `mask` are stored cleared on write, like SW_RESET.
    pub(crate) fn with_self_clearing(mut self, reg: u8, mask: u8) -> Self {
        self.self_clearing.push((reg, mask));
        self
    }

    /// Every read touching `reg` fails with `Error::Bus`.
    pub(crate) fn with_failing_read(mut self, reg: u8) -> Self {
        self.failing_reads.push(reg);
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Start address of every read transaction, in order.
    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn next_value(&mut self, reg: u8) -> u8 {
        for (scripted_reg, values) in &mut self.scripted {
            if *scripted_reg == reg {
                if let Some(value) = values.pop_front() {
                    return value;
                }
            }
        }
        self.regs[reg as usize]
    }
}

impl Interface for MockInterface {
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer).await?;
        Ok(buffer[0])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.reads.push(reg);
        self.transactions.push(Transaction::Read(reg));
        let len = buffer.len() as u8;
        if self
            .failing_reads
            .iter()
            .any(|&failing| failing.wrapping_sub(reg) < len)
        {
            return Err(Error::Bus);
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.next_value(addr);
        }
        Ok(())
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let mask = self
            .self_clearing
            .iter()
            .filter(|(clearing_reg, _)| *clearing_reg == reg)
            .fold(0u8, |acc, (_, mask)| acc | mask);
        self.regs[reg as usize] = value & !mask;
        self.writes.push((reg, value));
        self.transactions.push(Transaction::Write(reg, value));
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) total_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockSerial {
    pub(crate) lines: Vec<std::string::String>,
    pub(crate) fail_next: u32,
}

impl MockSerial {
    pub(crate) fn failing(count: u32) -> Self {
        Self {
            lines: Vec::new(),
            fail_next: count,
        }
    }
}

impl SerialTx for MockSerial {
    type Error = ();

    async fn transmit(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(());
        }
        let line = std::str::from_utf8(bytes).map_err(|_| ())?;
        self.lines.push(line.into());
        Ok(())
    }
}
