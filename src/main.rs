use clap::Parser;

use mask_generator::context::Context;
use mask_generator::masks::{generate_mask_culture, MaskCulture, TemplateLibrary};
use mask_generator::world::WorldBundle;

#[derive(Parser, Debug)]
#[command(name = "mask_generator")]
#[command(about = "Generate procedural regions, inhabitants, and mask cultures from a seed")]
struct Args {
    /// World seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<String>,

    /// Era ordinal to generate for
    #[arg(short, long, default_value = "0")]
    era: i32,

    /// Number of regions in the world
    #[arg(short, long, default_value = "4")]
    regions: u32,

    /// Inhabitants generated per region
    #[arg(short, long, default_value = "3")]
    npcs: u32,

    /// Generate only the mask culture at this x coordinate (with --site-y)
    #[arg(long)]
    site_x: Option<i32>,

    /// Generate only the mask culture at this y coordinate (with --site-x)
    #[arg(long)]
    site_y: Option<i32>,

    /// Emit JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args
        .seed
        .unwrap_or_else(|| rand::random::<u64>().to_string());
    let library = TemplateLibrary::builtin();

    if let (Some(x), Some(y)) = (args.site_x, args.site_y) {
        let ctx = Context::new(seed.clone(), x, y, args.era);
        let culture = generate_mask_culture(&library, &ctx);
        if args.json {
            match serde_json::to_string_pretty(&culture) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("failed to serialize culture: {}", e),
            }
        } else {
            println!("Seed: {}  site: ({}, {})  era: {}", seed, x, y, args.era);
            print_culture(&culture);
        }
        return;
    }

    let world = WorldBundle::generate(&library, &seed, args.era, args.regions, args.npcs);
    if args.json {
        match serde_json::to_string_pretty(&world) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize world: {}", e),
        }
        return;
    }

    println!("Seed: {}  era: {}  regions: {}", seed, args.era, world.regions.len());
    for bundle in &world.regions {
        let region = &bundle.region;
        println!();
        println!(
            "=== {} ({}, {}) at {:?}, travel cost {} ===",
            region.name,
            region.biome.name(),
            region.climate.name(),
            bundle.site,
            region.travel_cost
        );
        for symbol in &region.symbols {
            println!("  landmark: {}", symbol);
        }
        for custom in &region.customs {
            println!("  custom:   {}", custom);
        }
        for taboo in &region.taboos {
            println!("  taboo:    {}", taboo);
        }
        for edge in &region.tensions {
            println!("  tension:  {} ({})", edge.faction, edge.kind.name());
        }
        for npc in &bundle.inhabitants {
            println!(
                "  {} the {}: {}, {}",
                npc.name,
                npc.role.name(),
                npc.disposition.name(),
                npc.visual_style
            );
        }
        print_culture(&bundle.masks);
    }
}

fn print_culture(culture: &MaskCulture) {
    println!(
        "  mask culture (from {}):",
        culture.source_seeds.join(" + ")
    );
    for blueprint in &culture.blueprints {
        println!(
            "    {:>5.1}%  {}: {} {} {}, {} motif, {} wear, {}",
            blueprint.share * 100.0,
            blueprint.name,
            blueprint.finish.name(),
            blueprint.material.name(),
            blueprint.form.name(),
            blueprint.motif.name(),
            blueprint.wear.name(),
            blueprint.status.name()
        );
    }
    for blueprint in &culture.restricted {
        println!(
            "    [restricted] {:>5.1}%  {}",
            blueprint.share * 100.0,
            blueprint.name
        );
    }
}
