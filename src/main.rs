use oil_spill_detector::image::{ChannelOrder, ColorImageU8};
use oil_spill_detector::{DetectorParams, SpillDetector};

fn main() {
    // Demo stub: bright synthetic sea with a dark square slick
    let (w, h) = (640usize, 480usize);
    let mut rgb = vec![180u8; w * h * 3];
    for y in 200..280 {
        for x in 300..380 {
            let i = (y * w + x) * 3;
            rgb[i..i + 3].copy_from_slice(&[10, 12, 15]);
        }
    }
    let image = ColorImageU8::packed(w, h, ChannelOrder::Rgb, &rgb);

    let detector = SpillDetector::new(DetectorParams::default());
    match detector.detect(image) {
        Ok(res) => println!(
            "pixel_count={} area_km2={:.4} confidence={:.2} risk={}",
            res.pixel_count, res.area_km2, res.confidence, res.risk_level
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
