use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icon128.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking generated icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let top = rgba_img.get_pixel(0, 0);
    let bottom = rgba_img.get_pixel(0, height - 1);

    println!("\nGradient samples (left edge):");
    println!("  row 0:    RGBA [{}, {}, {}, {}]", top[0], top[1], top[2], top[3]);
    println!(
        "  row {}:  RGBA [{}, {}, {}, {}]",
        height - 1,
        bottom[0],
        bottom[1],
        bottom[2],
        bottom[3]
    );

    if *top == image::Rgba([102, 126, 234, 255]) {
        println!("✓ Gradient starts at the expected color");
    } else {
        println!("⚠ Gradient start does not match the default start color");
    }

    // A vertical gradient gets bluer toward the top and redder toward the
    // bottom with the default endpoint colors.
    if bottom[2] < top[2] {
        println!("✓ Gradient darkens toward the bottom");
    } else {
        println!("⚠ No top-to-bottom gradient detected");
    }

    if width >= 32 {
        let center = rgba_img.get_pixel(width / 2, height / 2);
        println!(
            "\nCenter pixel (x={}, y={}): RGBA [{}, {}, {}, {}]",
            width / 2,
            height / 2,
            center[0],
            center[1],
            center[2],
            center[3]
        );

        if *center == image::Rgba([255, 255, 140, 255]) {
            println!("✓ Flower center detected");
        } else {
            println!("⚠ Flower center may not be properly drawn");
        }
    } else {
        println!("\nIcon is below 32px; no flower overlay expected");
    }
}
