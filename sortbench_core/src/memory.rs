//! Best-effort sampling of the memory used by the current process.
//!
//! The reading is inherently noisy: anything else the process allocates between two samples
//! shows up in the difference. A sampler that cannot read the value returns 0, which only means
//! less information, never an error.

use sysinfo::{Pid, System};

/// Something that can report how much memory the process currently uses, in bytes.
pub trait MemorySampler {
    fn sample(&mut self) -> u64;
}

/// Reads the resident set size of the running process through [`sysinfo`].
pub struct ProcessMemory {
    system: System,
    pid: Option<Pid>,
}

impl ProcessMemory {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: sysinfo::get_current_pid().ok(),
        }
    }
}

impl Default for ProcessMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySampler for ProcessMemory {
    fn sample(&mut self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };

        if !self.system.refresh_process(pid) {
            return 0;
        }

        self.system
            .process(pid)
            .map(|process| process.memory())
            .unwrap_or(0)
    }
}

/// A sampler for platforms, or runs, where memory is not measured. Always reads 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMemory;

impl MemorySampler for NoMemory {
    fn sample(&mut self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_memory_is_readable_twice() {
        let mut memory = ProcessMemory::new();
        // Either supported (non-zero) or gracefully zero; never a panic.
        let first = memory.sample();
        let second = memory.sample();
        assert_eq!(first == 0, second == 0);
    }

    #[test]
    fn no_memory_reads_zero() {
        assert_eq!(NoMemory.sample(), 0);
    }
}
