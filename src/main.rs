use clap::Parser;
use colored::*;

use posturefit::args::Args;
use posturefit::config::AppConfig;
use posturefit::ui;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list {
        let cameras = nokhwa::query(nokhwa::utils::ApiBackend::Auto)?;
        println!("Available Cameras:");
        println!("{:<5} | {:<30} | {:<10}", "Index", "Name", "Misc");
        println!("{}", "-".repeat(60));
        for cam in cameras {
            println!("{:<5} | {:<30} | {:?}", cam.index(), cam.human_name(), cam.misc());
        }
        return Ok(());
    }

    let mut config = AppConfig::load()?;
    if let Some(index) = args.cam_index {
        config.detection.camera_index = index;
    }
    if let Some(model) = args.model {
        config.detection.model_path = model;
    }
    if args.mirror {
        config.detection.mirror_mode = true;
    }

    println!("{}", "PostureFit starting...".green().bold());
    ui::run(config)
}
