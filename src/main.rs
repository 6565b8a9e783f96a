//! md2doc - Main Entry Point
//!
//! Thin command-line shell around the rendering and export library: reads
//! markdown from a file or stdin and prints Word-ready HTML, or copies the
//! rendered rich text straight to the clipboard.

use std::io::Read;
use std::process::ExitCode;
use std::{env, fs, io};

use log::info;

use md2doc::export::dom::parse_html_fragment;
use md2doc::{is_rich_copy_supported, ClipboardExporter, RenderOptions, RichTextRenderer};

/// Application name constant.
const APP_NAME: &str = "md2doc";

const USAGE: &str = "Usage: md2doc [FILE] [--copy] [--no-list-spacing]

Reads markdown from FILE (or stdin) and prints Word-ready HTML.

Options:
  --copy              copy the rendered rich text to the clipboard
  --no-list-spacing   do not insert a space before list-item text
  -h, --help          show this help";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut input_path: Option<String> = None;
    let mut copy = false;
    let mut options = RenderOptions::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--copy" => copy = true,
            "--no-list-spacing" => options.add_space_before_first_level_list = false,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ if arg.starts_with('-') => {
                eprintln!("{}: unknown option '{}'\n\n{}", APP_NAME, arg, USAGE);
                return ExitCode::FAILURE;
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("{}: only one input file is supported\n\n{}", APP_NAME, USAGE);
                    return ExitCode::FAILURE;
                }
                input_path = Some(arg);
            }
        }
    }

    let markdown = match read_input(input_path.as_deref()) {
        Ok(markdown) => markdown,
        Err(err) => {
            eprintln!("{}: failed to read input: {}", APP_NAME, err);
            return ExitCode::FAILURE;
        }
    };

    info!("Rendering {} bytes of markdown", markdown.len());
    let renderer = RichTextRenderer::new();
    let html = renderer.render(&markdown, &options);

    if !copy {
        print!("{}", html);
        return ExitCode::SUCCESS;
    }

    if !is_rich_copy_supported() {
        eprintln!("{}: no clipboard is available on this system", APP_NAME);
        return ExitCode::FAILURE;
    }

    let fragment = parse_html_fragment(&html);
    let mut exporter = ClipboardExporter::new();
    match exporter.copy_rich_text(&fragment) {
        Ok(path) => {
            println!("Copied rich text to the clipboard ({})", path.label());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", APP_NAME, err);
            ExitCode::FAILURE
        }
    }
}

/// Read markdown from the given path, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut markdown = String::new();
            io::stdin().read_to_string(&mut markdown)?;
            Ok(markdown)
        }
    }
}
