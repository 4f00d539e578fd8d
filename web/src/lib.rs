use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    grid: game::GridProps,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#--seed=abc&-vv`.
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(location_hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::error!(format!("could not parse arguments: {err}"));
        Args::parse_from([""])
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("error initializing logger: {err}"));
        }
    }
    log::debug!("args: {:?}", args);

    let Some(root) = document().get_element_by_id("kioku") else {
        log::error!("could not find id=\"kioku\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GridView>::with_root_and_props(root, args.grid).render();
}
