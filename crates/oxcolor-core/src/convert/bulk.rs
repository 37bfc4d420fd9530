//! Slice conversion
//!
//! Bulk conversion is repeated application of the single-value path; each
//! element is independent, so the parallel variant splits the slices into
//! disjoint chunks.

use crate::adaptation::lms::check_len;
use crate::convert::{ColorSpace, ColorSpaceConverter};
use crate::error::Result;

#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Elements per parallel work item
#[cfg(feature = "rayon")]
const PAR_CHUNK_LEN: usize = 4096;

impl ColorSpaceConverter {
    /// Convert every element of `input` into the front of `output`
    ///
    /// Fails with [`Error::BufferSize`](crate::Error::BufferSize) if `output`
    /// is shorter than `input`; elements of `output` past `input.len()` are
    /// left untouched.
    pub fn convert_slice<S: ColorSpace, D: ColorSpace>(
        &self,
        input: &[S],
        output: &mut [D],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        self.convert_chunk(input, output);
        Ok(())
    }

    /// [`convert_slice`](Self::convert_slice) spread over the rayon pool
    #[cfg(feature = "rayon")]
    pub fn par_convert_slice<S: ColorSpace, D: ColorSpace>(
        &self,
        input: &[S],
        output: &mut [D],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        output[..input.len()]
            .par_chunks_mut(PAR_CHUNK_LEN)
            .zip(input.par_chunks(PAR_CHUNK_LEN))
            .for_each(|(dst, src)| self.convert_chunk(src, dst));
        Ok(())
    }

    #[inline]
    fn convert_chunk<S: ColorSpace, D: ColorSpace>(&self, input: &[S], output: &mut [D]) {
        for (src, dst) in input.iter().zip(output.iter_mut()) {
            *dst = self.convert(*src);
        }
    }
}
