/// Basic example: render a generated test image as ASCII art
///
/// Draws a bright circle on a gray background, converts it and prints the
/// result.
use asciify::{convert_image_to_ascii, render_ascii};
use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("asciify - Basic Example");
    println!("=======================\n");

    let width = 48;
    let height = 24;
    let mut img = RgbImage::from_pixel(width, height, Rgb([100, 100, 100]));

    // White circle with a black rim
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 9.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = (y as f32 - center_y) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            } else if (dist - radius).abs() < 2.0 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }

    let input = std::env::temp_dir().join("asciify_basic.png");
    img.save(&input)?;
    println!("Created test image: {}x{} at {}\n", width, height, input.display());

    print!("{}", render_ascii(&input)?);

    let output = convert_image_to_ascii(&input)?;
    println!("\nOutput saved to file: {}", output.display());

    Ok(())
}
