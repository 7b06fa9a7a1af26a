mod cfg;
mod cli;

use {
    std::io::{self, Read},
    accelcfg::{AccelArgs, CapMode, Controller, OffsetMode, VariantCatalog}
};

type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1)
    }
}

fn run() -> Result {
    let args = argh::from_env::<cli::Args>();

    match args.command {
        cli::Command::List(_) => list(),
        cli::Command::Layout(args) => layout(args),
        cli::Command::Commit(args) => commit(args),
        cli::Command::Load(args) => load(args)
    }
}

fn list() -> Result {
    print!("{}", serde_yaml::to_string(&VariantCatalog::get().indices())?);
    Ok(())
}

fn layout(args: cli::Layout) -> Result {
    let config = cfg::load_config();
    let mut controller = Controller::new(config.layout);
    controller.select_variant(args.variant.as_deref().unwrap_or(&config.initial_variant))?;

    if let Some(top) = args.top {
        controller.set_top(top)
    }

    print_slots(&controller);
    println!("next row at {}", controller.next_top());
    Ok(())
}

fn commit(args: cli::Commit) -> Result {
    let config = cfg::load_config();
    let mut controller = Controller::new(config.layout);
    controller.select_variant(args.variant.as_deref().unwrap_or(&config.initial_variant))?;

    if args.sensitivity_cap {
        controller.set_cap_mode(CapMode::Sensitivity)
    }

    if args.legacy_offset {
        controller.set_offset_mode(OffsetMode::Legacy)
    }

    for set in &args.set {
        controller.edit(set.role, &set.value)?
    }

    print!("{}", serde_yaml::to_string(&controller.commit())?);
    Ok(())
}

fn load(args: cli::Load) -> Result {
    let mut yaml = String::new();
    io::stdin().read_to_string(&mut yaml)?;
    let accel_args = serde_yaml::from_str::<AccelArgs>(&yaml)?;

    let config = cfg::load_config();
    let mut controller = Controller::new(config.layout);
    controller.load_from_args(args.index, &accel_args)?;

    print_slots(&controller);
    print!("{}", serde_yaml::to_string(&controller.commit())?);
    Ok(())
}

fn print_slots(controller: &Controller) {
    if let Some(variant) = controller.current_variant() {
        println!("{} ({})", variant, variant.index())
    }

    for slot in controller.active_slots() {
        println!("{:>5}  {:<12} {}", slot.position(), slot.label(), slot.value())
    }
}
