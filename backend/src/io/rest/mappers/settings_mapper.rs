use shared::SettingsResponse;

use crate::domain::settings_service::ActiveSettings;

pub struct SettingsMapper;

impl SettingsMapper {
    /// Wire form of the active settings, with any non-fatal warnings
    pub fn to_settings_response(active: ActiveSettings) -> SettingsResponse {
        let warnings = active.warnings();
        SettingsResponse {
            settings: active.settings,
            warnings,
        }
    }
}
