//! Fixed color tables and nearest-color lookup.

/// The black/white reference palette used to decide whether a Braille dot is lit.
pub const BLACK_WHITE: [[u8; 3]; 2] = [[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]];

const fn rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

/// Level of each axis of the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

const fn build_palette() -> [[u8; 3]; 256] {
    let basic: [u32; 16] = [
        0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0xc0c0c0,
        0x808080, 0xff0000, 0x00ff00, 0xffff00, 0x0000ff, 0xff00ff, 0x00ffff, 0xffffff,
    ];

    let mut palette = [[0u8; 3]; 256];
    let mut i = 0;
    while i < 16 {
        palette[i] = rgb(basic[i]);
        i += 1;
    }

    // 16..=231: r * 36 + g * 6 + b
    let mut i = 0;
    while i < 216 {
        palette[16 + i] = [CUBE_LEVELS[i / 36], CUBE_LEVELS[(i / 6) % 6], CUBE_LEVELS[i % 6]];
        i += 1;
    }

    // 232..=255: gray ramp 0x08, 0x12, ... 0xee
    let mut i = 0;
    while i < 24 {
        let v = 8 + 10 * i as u8;
        palette[232 + i] = [v, v, v];
        i += 1;
    }

    palette
}

/// The standard 8-bit ANSI terminal palette. Index is the SGR color code.
pub const PALETTE: [[u8; 3]; 256] = build_palette();

/// Squared Euclidean distance between two RGB triples.
#[inline]
pub fn distance2(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.abs_diff(y) as u32;
            d * d
        })
        .sum()
}

/// Index of the palette entry closest to `color`. On a tie the lowest index wins.
pub fn nearest(palette: &[[u8; 3]], color: [u8; 3]) -> u8 {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (i, &entry) in palette.iter().enumerate() {
        let dist = distance2(entry, color);
        if dist < best_dist {
            best = i;
            best_dist = dist;
            if dist == 0 {
                break;
            }
        }
    }
    best as u8
}
