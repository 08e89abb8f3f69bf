use std::ops::Range;
use std::sync::mpsc;

use threadpool::ThreadPool;

use crate::{
    color::{RGBColorFormat, Rgb565ColorFormat},
    image::Image,
    Error, Result,
};

struct ConvertedBand {
    index: usize,
    dots: Vec<Rgb565ColorFormat>,
}

fn convert_band(dots: &[RGBColorFormat<u8>]) -> Vec<Rgb565ColorFormat> {
    dots.iter().map(Rgb565ColorFormat::from).collect()
}

pub struct Transformer<'a> {
    image: &'a Image<u8>,
    threadpool: &'a ThreadPool,
}

impl<'a> Transformer<'a> {
    pub fn new(image: &'a Image<u8>, threadpool: &'a ThreadPool) -> Self {
        Transformer { image, threadpool }
    }

    /// Number of whole rows handed to a single job.
    fn rows_per_band(&self) -> usize {
        let height = self.image.height() as usize;
        let workers = self.threadpool.max_count().max(1);
        height.div_ceil(workers).max(1)
    }

    fn band_ranges(&self) -> Vec<Range<usize>> {
        let band_length = self.rows_per_band() * self.image.width().max(1) as usize;
        let number_of_dots = self.image.dots().len();
        (0..number_of_dots)
            .step_by(band_length)
            .map(|start| start..(start + band_length).min(number_of_dots))
            .collect()
    }

    fn collect_bands(
        receiver: mpsc::Receiver<ConvertedBand>,
        number_of_bands: usize,
    ) -> Result<Vec<Vec<Rgb565ColorFormat>>> {
        let mut bands: Vec<ConvertedBand> = receiver.iter().take(number_of_bands).collect();
        if bands.len() != number_of_bands {
            return Err(Error::FailedToConvertImageRows(bands.len(), number_of_bands));
        }
        bands.sort_by_key(|band| band.index);
        Ok(bands.into_iter().map(|band| band.dots).collect())
    }

    /// Packs every dot. The returned bands hold whole rows and are in
    /// top to bottom order, so writing them one after another is row-major.
    pub fn transform(&self) -> Result<Vec<Vec<Rgb565ColorFormat>>> {
        let ranges = self.band_ranges();
        let number_of_bands = ranges.len();
        let (sender, receiver) = mpsc::channel();
        for (index, range) in ranges.into_iter().enumerate() {
            let sender = sender.clone();
            let dots = self.image.shared_dots();
            self.threadpool.execute(move || {
                let dots = convert_band(&dots[range]);
                log::debug!("Converted band {} with {} dots", index, dots.len());
                // the receiver only disappears once the transformation failed
                let _ = sender.send(ConvertedBand { index, dots });
            });
        }
        drop(sender);
        Self::collect_bands(receiver, number_of_bands)
    }
}
