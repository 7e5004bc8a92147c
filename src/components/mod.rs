//! UI Components
//!
//! One component per utility panel, plus shared controls.

mod tab_bar;
mod confirm_button;
mod bmi_panel;
mod symptom_panel;
mod checklist_panel;
mod medicine_panel;
mod first_aid_panel;
mod recent_log;

pub use tab_bar::{panel_class, Tab, TabBar};
pub use confirm_button::ConfirmButton;
pub use bmi_panel::BmiPanel;
pub use symptom_panel::SymptomPanel;
pub use checklist_panel::ChecklistPanel;
pub use medicine_panel::MedicinePanel;
pub use first_aid_panel::FirstAidPanel;
pub use recent_log::RecentLog;
