const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit hash (FNV-1a) of a file name, used to seed the ribbon
/// orientation generator. Unlike `DefaultHasher` the value never changes
/// between toolchains, so a given file always gets the same geometry.
pub fn seed_from_name(name: &str) -> u64 {
    name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
