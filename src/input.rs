/// Raw bytes of a numeric column: unsigned decimal numbers separated by
/// arbitrary non-digit bytes.
pub struct NumberColumn<'input>(pub(crate) &'input [u8]);

impl<'input> NumberColumn<'input> {
    pub fn new(bytes: &'input [u8]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &'input [u8] {
        self.0
    }

    /// Returns an iterator of up to `num_chunks` items. These are
    /// non-overlapping sub-columns that collectively cover `self`; a chunk
    /// boundary is always extended to the next non-digit byte so no digit
    /// run is ever split between workers.
    ///
    /// NOTE: make sure not to call this with zero chunks as it will panic in
    /// that case.
    pub(crate) fn chunks(&self, num_chunks: usize) -> impl Iterator<Item = NumberColumn<'input>> {
        let length = self.0.len();
        let chunk_size = length / num_chunks;
        let chunk_size = usize::from(chunk_size == 0) * length + chunk_size;
        struct ChunkIter<'a> {
            input: &'a [u8],
            chunk_size: usize,
        }
        impl<'a> Iterator for ChunkIter<'a> {
            type Item = NumberColumn<'a>;
            fn next(&mut self) -> Option<Self::Item> {
                let length_of_rest = self.input.len();
                if length_of_rest == 0 {
                    return None;
                }
                let end = std::cmp::min(self.chunk_size, length_of_rest);
                let take_up_to = end
                    + self.input[end..]
                        .iter()
                        .position(|byte| !byte.is_ascii_digit())
                        .unwrap_or(length_of_rest - end);
                let out = &self.input[..take_up_to];
                self.input = &self.input[take_up_to..];
                Some(NumberColumn(out))
            }
        }

        ChunkIter {
            input: self.0,
            chunk_size,
        }
    }
}
