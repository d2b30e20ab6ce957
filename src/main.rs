#![warn(non_snake_case)]
//! # Room Designer Entry Point
//!
//! Parametrize and procedurally generate single ASCII dungeon rooms. This file
//! initializes logging, loads the designer settings and then either opens the
//! eframe/egui designer window or, when built without the `gui` feature,
//! prints one generated room to stdout.
//!
//! Settings are read from the file named by `ROOM_DESIGNER_CONFIG`, falling
//! back to `room_designer.json` in the working directory.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;

use log::info;
use room_designer::config::DesignerSettings;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Room designer starting...");

    let settings = DesignerSettings::load(&DesignerSettings::default_path())?;

    #[cfg(feature = "gui")]
    room_designer::ui::run_main_window(settings)?;

    #[cfg(not(feature = "gui"))]
    {
        let mut editor = room_designer::editor::Editor::new(settings);
        let grid = editor.generate_room()?;
        println!("{}", grid);
    }

    info!("Room designer exiting.");
    Ok(())
}
