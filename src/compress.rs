use crate::consts::{SHIFTS, SINES};
use crate::padding::BLOCK_LEN;

/// Fold every block of a padded message into the state.
///
/// `padded` must be the output of [`pad`](crate::pad), whose length is always
/// a multiple of 64.
pub(crate) fn compress(state: &mut [u32; 4], padded: &[u8]) {
    debug_assert!(padded.len() % BLOCK_LEN == 0);
    for block in padded.chunks_exact(BLOCK_LEN) {
        transform(state, block);
    }
}

fn decode(block: &[u8]) -> [u32; 16] {
    let mut segments: [u32; 16] = [0; 16];
    for (segment, bytes) in segments.iter_mut().zip(block.chunks_exact(4)) {
        *segment = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    segments
}

#[inline(always)]
fn transform(state: &mut [u32; 4], block: &[u8]) {
    let segments = decode(block);

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..16 {
        let f = (b & c) | (!b & d);
        let g = i;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 16..32 {
        let f = (d & b) | (!d & c);
        let g = (5 * i + 1) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 32..48 {
        let f = b ^ c ^ d;
        let g = (3 * i + 5) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    for i in 48..64 {
        let f = c ^ (b | !d);
        let g = (7 * i) % 16;
        cycle(&mut a, &mut b, &mut c, &mut d, f, segments[g], i);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[inline(always)]
fn cycle(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, mut f: u32, g: u32, i: usize) {
    f = f.wrapping_add(*a).wrapping_add(SINES[i]).wrapping_add(g);
    *a = *d;
    *d = *c;
    *c = *b;
    *b = f.rotate_left(SHIFTS[i]).wrapping_add(*b);
}
