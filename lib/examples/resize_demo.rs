use asciify::sampler::target_dimensions;

fn main() {
    println!("asciify - Resize Policy Demo");
    println!("============================\n");

    let test_cases = [
        (150, 150, "150x150 (fits)"),
        (400, 200, "400x200 (landscape)"),
        (150, 300, "150x300 (only height too large)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (200, 200, "200x200 (exactly at the cap)"),
    ];

    for (width, height, description) in test_cases {
        println!("Testing: {}", description);
        match target_dimensions(width, height) {
            Some((w, h)) => println!("  Resized to {}x{} -> {} lines of {} chars", w, h, h, w * 2),
            None => println!(
                "  No resize needed -> {} lines of {} chars",
                height,
                width * 2
            ),
        }
        println!();
    }

    println!("Images are scaled with Lanczos3 so the longer side is at most 200 pixels.");
}
