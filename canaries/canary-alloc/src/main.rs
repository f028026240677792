#![cfg(not(any(test, doctest)))]
#![no_std]
#![no_main]

extern crate keccak_perm;
extern crate keccak_sp800_185;
extern crate keccak_sponge;

#[cfg(target_os = "none")] // hack to please rust-analyzer
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[allow(unused)]
fn main() {}
