use palettize::color::Rgb;
use palettize::error::ThemeError;
use palettize::palette::{PaletteData, Variant};

fn main() -> Result<(), ThemeError> {
    let colors: Vec<Rgb> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Rgb>())
        .collect::<Result<_, _>>()?;
    let colors = if colors.is_empty() {
        vec![Rgb::new(0xcc, 0x78, 0x32), Rgb::new(0x6a, 0x87, 0x59)]
    } else {
        colors
    };

    let data = PaletteData::builtin();
    for variant in Variant::ALL {
        let palette = data.palette(variant)?;
        println!("{}", variant);

        for color in &colors {
            let lab = color.to_lab();
            let entry = palette.nearest_entry(&lab);
            println!(
                "    {} → {} {:<10} ΔE {:.2}",
                color,
                entry.rgb(),
                entry.name(),
                lab.delta_e(entry.lab())
            );
        }
    }

    Ok(())
}
