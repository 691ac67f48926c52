use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
use stego_core::{embed, extract, GroupWidth, ImageCarrier, Marker};

pub fn image_extraction(c: &mut Criterion) {
    let marker = Marker::try_from("$EOD$").expect("Cannot create marker");
    let payload = vec![0x42_u8; 16 * 1024];
    let k = GroupWidth::new(3).expect("Invalid group width");

    let img: RgbImage =
        ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let mut carrier = ImageCarrier::new(DynamicImage::ImageRgb8(img), ImageFormat::Png)
        .expect("Cannot create image carrier");
    embed(&mut carrier, &payload, &marker, k).expect("Cannot embed payload");

    c.bench_function("Image Extraction k=3", |b| {
        b.iter(|| {
            let unveiled = extract(&carrier, &marker, k).expect("Cannot extract payload");
            assert_eq!(unveiled.len(), payload.len());
        })
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
