//! Paint-bucket flood fill.

use super::canvas::PixelBuffer;
use super::color::Rgba;
use std::collections::VecDeque;

/// Fills the 4-connected region around `(x, y)` with `fill`.
///
/// A neighbour joins the region when none of its straight RGBA channels differs
/// from the seed pixel by more than `tolerance`. Returns the number of pixels
/// painted; seeds outside the buffer and seeds already carrying `fill` paint nothing.
pub fn flood_fill(pixels: &mut PixelBuffer<'_>, x: i32, y: i32, fill: Rgba, tolerance: u8) -> usize {
    let Some(seed) = pixels.pixel(x, y) else {
        return 0;
    };
    if seed == fill {
        return 0;
    }

    let width = pixels.width() as usize;
    let height = pixels.height() as usize;
    let fill_word = fill.to_argb32();
    let mut visited = vec![false; width * height];
    let mut queue = VecDeque::new();
    let mut painted = 0;

    visited[y as usize * width + x as usize] = true;
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        pixels.set_word(cx, cy, fill_word);
        painted += 1;

        for (nx, ny) in [(cx - 1, cy), (cx + 1, cy), (cx, cy - 1), (cx, cy + 1)] {
            let Some(candidate) = pixels.pixel(nx, ny) else {
                continue;
            };
            let index = ny as usize * width + nx as usize;
            if visited[index] {
                continue;
            }
            visited[index] = true;
            if candidate.max_channel_delta(seed) <= tolerance {
                queue.push_back((nx, ny));
            }
        }
    }

    painted
}
