/// Basic example: Convert a generated test image to colored ASCII art
///
/// This builds a gradient with a bright circle and prints it to the terminal
use ascii_sampler::{RenderConfig, Sink, SourceImage, process_to_sinks};

fn main() -> ascii_sampler::Result<()> {
    println!("ASCII Sampler - Basic Example");
    println!("=============================\n");

    // Create a 160x120 test image: horizontal hue gradient, vertical fade
    let width = 160u32;
    let height = 120u32;
    let mut bytes = Vec::with_capacity((width * height * 3) as usize);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 35.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // White circle
                bytes.extend_from_slice(&[255, 255, 255]);
            } else {
                let r = (x * 255 / width) as u8;
                let g = (y * 255 / height) as u8;
                bytes.extend_from_slice(&[r, g, 255 - r]);
            }
        }
    }

    let source = SourceImage::from_raw(width, height, bytes)?;
    println!("Created test image: {}x{}", width, height);

    let config = RenderConfig {
        fix_aspect: true,
        color: true,
        ..RenderConfig::new(80, 80)
    };

    println!("Rendering with config:");
    println!("  - Grid: {}x{}", config.output_width, config.corrected_height());
    println!("  - Color: {}", config.color);
    println!();

    process_to_sinks(&source, &config, &mut [Sink::stdout(config.color)])?;

    println!("\nASCII conversion complete!");
    Ok(())
}
