use eframe::egui;
use log::{error, info};

use catatan_keuangan::ui::app_state::CatatanKeuanganApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Catatan Keuangan egui application");

    // Window options sized for the single-column journal layout
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 860.0])
            .with_min_inner_size([440.0, 600.0])
            .with_title("Catatan Keuangan Harian")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Catatan Keuangan Harian",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match CatatanKeuanganApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Catatan Keuangan app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
