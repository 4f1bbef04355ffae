//! Random glyph flicker for the "SLEEP" backdrop and the hero title.

use rand::Rng;

pub const MATRIX_WORD: &str = "SLEEP ";
const MATRIX_REPEAT: usize = 60;
/// Upper bound on glyphs re-rolled per tick.
pub const MATRIX_FLIPS_PER_TICK: usize = 20;
pub const TITLE_FLIPS_PER_TICK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub flipping: bool,
}

/// Backdrop text made of the repeated word, one glyph per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixField {
    glyphs: Vec<Glyph>,
}

impl Default for MatrixField {
    fn default() -> Self {
        let text = MATRIX_WORD.repeat(MATRIX_REPEAT);
        Self {
            glyphs: text
                .trim()
                .chars()
                .map(|ch| Glyph { ch, flipping: false })
                .collect(),
        }
    }
}

impl MatrixField {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Replace up to `count` random glyphs with letters from the word and mark
    /// them flipping. Returns the touched indices so the caller can clear
    /// the flip later. The same index may come up twice.
    pub fn reroll<R: Rng>(&mut self, rng: &mut R, count: usize) -> Vec<usize> {
        if self.glyphs.is_empty() {
            return Vec::new();
        }
        let letters: Vec<char> = MATRIX_WORD.trim_end().chars().collect();
        let count = count.min(self.glyphs.len());
        (0..count)
            .map(|_| {
                let idx = rng.gen_range(0..self.glyphs.len());
                let glyph = &mut self.glyphs[idx];
                glyph.ch = letters[rng.gen_range(0..letters.len())];
                glyph.flipping = true;
                idx
            })
            .collect()
    }

    pub fn clear_flips(&mut self, indices: &[usize]) {
        for &idx in indices {
            if let Some(glyph) = self.glyphs.get_mut(idx) {
                glyph.flipping = false;
            }
        }
    }
}

/// Indices of title characters to flip this tick.
pub fn pick_title_flips<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.gen_range(0..len)).collect()
}

/// Title characters as rendered: spaces become non-breaking so every cell
/// keeps its width while flipping.
pub fn title_cells(title: &str) -> Vec<char> {
    title
        .trim()
        .chars()
        .map(|ch| if ch == ' ' { '\u{00a0}' } else { ch })
        .collect()
}
