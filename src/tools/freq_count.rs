/// Returns a frequency count of every byte value in the input.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    let mut freqs = [0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

#[test]
fn freqs_test() {
    let f = freqs("Making a silly test.".as_bytes());
    assert_eq!(f[b'l' as usize], 2);
    assert_eq!(f[b'a' as usize], 2);
    assert_eq!(f[b'.' as usize], 1);
    assert_eq!(f[b'z' as usize], 0);
    assert_eq!(f.iter().sum::<u32>(), 20);
}
