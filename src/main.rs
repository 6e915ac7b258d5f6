use anyhow::Result;
use log::debug;

use fw_assets::{
    config::Config,
    embed,
    error::AssetError,
    favicon,
    report::{BASE64_BANNER, Tool},
    rgb565,
};

const HELP: &str = "Usage: fw-assets logo-header      convert src/logo_small.jpg into src/logo.h (RGB565)
       fw-assets favicon-base64   print src/logo.webp as a base64 C string literal
       fw-assets favicon-ico      resize web-ui/src/assets/logo.webp into data/favicon.ico (32x32)";

fn usage() -> ! {
    eprintln!("{HELP}");
    std::process::exit(1);
}

fn run(tool: Tool, config: &Config) -> Result<(), AssetError> {
    match tool {
        Tool::LogoHeader => {
            let dest = config.logo_header();
            rgb565::generate_logo_header(&config.logo_jpeg(), &dest)?;
            print_success(tool, &dest);
        }
        Tool::FaviconBase64 => {
            let declaration = embed::embed_favicon(&config.logo_webp())?;
            println!("{BASE64_BANNER}");
            println!("{declaration}");
        }
        Tool::FaviconIco => {
            let dest = config.favicon_output();
            favicon::generate_favicon(&config.favicon_source(), &dest)?;
            print_success(tool, &dest);
        }
    }
    Ok(())
}

fn print_success(tool: Tool, dest: &std::path::Path) {
    if let Some(line) = tool.success(dest) {
        println!("{line}");
    }
}

// 工具错误只打印, 退出码始终为 0; 仅用法错误返回 1
fn main() -> Result<()> {
    // .env 可能包含 RUST_LOG, 先加载再初始化日志
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }
    let config = Config::from_env();

    let args = std::env::args().collect::<Vec<_>>();
    let Some(tool) = args.get(1).and_then(|s| Tool::from_arg(s)) else {
        usage();
    };

    if let Err(e) = run(tool, &config) {
        debug!("{e:?}");
        println!("{}", tool.failure(&e));
    }

    Ok(())
}
