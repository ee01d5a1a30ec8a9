use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Camera index (overrides config)
    #[arg(short, long)]
    pub cam_index: Option<u32>,

    /// Path to the pose landmark ONNX model (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Mirror the camera output
    #[arg(long)]
    pub mirror: bool,

    /// List available cameras and exit
    #[arg(long)]
    pub list: bool,
}
