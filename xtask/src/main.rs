use std::{env, fs, path::PathBuf, process::Command};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

const BIN_NAME: &str = "storage-swap";
const API_LEVEL: &str = "29";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Arch {
    #[value(name = "arm64")]
    Arm64,
    #[value(name = "arm")]
    Arm,
    #[value(name = "x86_64")]
    X86_64,
}

impl Arch {
    fn target(&self) -> &'static str {
        match self {
            Arch::Arm64 => "aarch64-linux-android",
            Arch::Arm => "armv7-linux-androideabi",
            Arch::X86_64 => "x86_64-linux-android",
        }
    }

    fn android_abi(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64-v8a",
            Arch::Arm => "armeabi-v7a",
            Arch::X86_64 => "x86_64",
        }
    }
}

#[derive(Parser)]
#[command(name = "xtask")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-compile with cargo-ndk and stage the binary under output/<abi>/
    Build {
        #[arg(long)]
        release: bool,
        #[arg(long, value_delimiter = ',', default_value = "arm64")]
        arch: Vec<Arch>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { release, arch } => {
            for a in arch {
                build(release, a)?;
            }
        }
    }
    Ok(())
}

fn build(release: bool, arch: Arch) -> Result<()> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    println!("Building {} for {} (API {})", BIN_NAME, arch.android_abi(), API_LEVEL);

    let mut cmd = Command::new(&cargo);
    cmd.args(["ndk", "-t", arch.target(), "-p", API_LEVEL, "build", "-p", BIN_NAME]);
    if release {
        cmd.arg("--release");
    }

    let status = cmd.status().context("Failed to run cargo ndk build")?;
    if !status.success() {
        bail!("Build failed for {}", arch.target());
    }

    let profile = if release { "release" } else { "debug" };
    let src_path = PathBuf::from("target")
        .join(arch.target())
        .join(profile)
        .join(BIN_NAME);
    if !src_path.exists() {
        bail!("Build finished but binary not found at: {}", src_path.display());
    }

    let output_dir = PathBuf::from("output").join(arch.android_abi());
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    let dst_path = output_dir.join(BIN_NAME);
    fs::copy(&src_path, &dst_path).context("Failed to copy binary to output")?;
    println!("Artifact copied to: {}", dst_path.display());

    Ok(())
}
