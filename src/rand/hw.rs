//! Hardware entropy sources.

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "/dev/urandom"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn entropy() -> u64 {
    use std::io::Read;

    let mut buf = [0u8; 8];
    match std::fs::File::open("/dev/urandom").and_then(|mut f| f.read_exact(&mut buf)) {
        Ok(()) => u64::from_ne_bytes(buf),
        Err(_) => 0x9e3779b97f4a7c15,
    }
}
