use std::time::{Duration, Instant};

use png2rgb565::color::RGBColorFormat;
use png2rgb565::image::writer::rgb565::Rgb565ImageWriter;
use png2rgb565::image::{Image, ImageWriter};
use threadpool::ThreadPool;

const IMAGE_WIDTH: u32 = 3840;
const IMAGE_HEIGHT: u32 = 2160;
const IMAGE_SIZE: usize = IMAGE_WIDTH as usize * IMAGE_HEIGHT as usize;

const NUMBER_OF_ROUNDS: usize = 10;
const THREAD_COUNTS: [usize; 4] = [1, 2, 4, 8];

fn create_test_image() -> Image<u8> {
    let dots = (0..IMAGE_SIZE)
        .map(|index| {
            let x = index % IMAGE_WIDTH as usize;
            let y = index / IMAGE_WIDTH as usize;
            RGBColorFormat::new((x % 256) as u8, (y % 256) as u8, ((x + y * 8) % 256) as u8)
        })
        .collect();
    Image::new(IMAGE_WIDTH, IMAGE_HEIGHT, dots)
}

struct Summary {
    fastest: Duration,
    median: Duration,
    slowest: Duration,
    megapixels_per_second: f64,
}

/// Expects a non-empty list of measurements.
fn summarize(mut measurements: Vec<Duration>) -> Summary {
    measurements.sort();
    let median = measurements[measurements.len() / 2];
    let seconds = median.as_secs_f64().max(f64::EPSILON);
    Summary {
        fastest: measurements[0],
        median,
        slowest: measurements[measurements.len() - 1],
        megapixels_per_second: IMAGE_SIZE as f64 / 1_000_000_f64 / seconds,
    }
}

fn time_rounds(image: &Image<u8>, threadpool: &ThreadPool) -> png2rgb565::Result<Vec<Duration>> {
    let mut output = Vec::with_capacity(IMAGE_SIZE * 2);
    let mut measurements = Vec::with_capacity(NUMBER_OF_ROUNDS);
    for _ in 0..NUMBER_OF_ROUNDS {
        output.clear();
        let start = Instant::now();
        Rgb565ImageWriter::new(&mut output, image, threadpool, "memory").write_image()?;
        measurements.push(start.elapsed());
    }
    Ok(measurements)
}

fn main() {
    println!("Creating {}x{} test image", IMAGE_WIDTH, IMAGE_HEIGHT);
    let test_image = create_test_image();

    for threads in THREAD_COUNTS {
        let threadpool = ThreadPool::new(threads);
        let measurements = match time_rounds(&test_image, &threadpool) {
            Ok(measurements) => measurements,
            Err(e) => {
                eprintln!("Conversion with {} threads failed: {}", threads, e);
                return;
            }
        };
        let summary = summarize(measurements);
        println!(
            "Threads: {:>2}, Fastest: {:>6} us, Median: {:>6} us, Slowest: {:>6} us, {:.1} MP/s",
            threads,
            summary.fastest.as_micros(),
            summary.median.as_micros(),
            summary.slowest.as_micros(),
            summary.megapixels_per_second,
        );
    }
}
