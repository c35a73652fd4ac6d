//! Per-draw entropy read from the CPU's cycle counter.
//!
//! x86_64 reads the time-stamp counter and aarch64 the virtual counter.
//! Targets without a stable user-space counter take a thread rng word.

/// Name of the counter `entropy` reads, for diagnostics.
pub const SOURCE_NAME: &str = if cfg!(target_arch = "x86_64") {
    "rdtsc"
} else if cfg!(target_arch = "aarch64") {
    "cntvct_el0"
} else {
    "thread rng"
};

#[inline(always)]
pub fn entropy() -> u64 {
    // SAFETY: rdtsc is available on every x86_64 CPU.
    #[cfg(target_arch = "x86_64")]
    let ticks = unsafe { core::arch::x86_64::_rdtsc() };

    #[cfg(target_arch = "aarch64")]
    let ticks = {
        let t: u64;
        // SAFETY: cntvct_el0 is readable from EL0 on Linux and macOS.
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) t, options(nomem, nostack)) };
        t
    };

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    let ticks: u64 = rand::random();

    ticks
}
