use serde::{Deserialize, Serialize};

/// Display font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// How often notification digests are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// Visual theme preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub dark_mode: bool,
    /// Accent color as a hex string (e.g., "#2196f3").
    pub accent_color: String,
    pub font_size: FontSize,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            accent_color: "#2196f3".into(),
            font_size: FontSize::Medium,
        }
    }
}

/// Notification delivery preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub email: bool,
    pub push: bool,
    pub frequency: NotificationFrequency,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            email: true,
            push: true,
            frequency: NotificationFrequency::Daily,
        }
    }
}

/// Singleton user preferences: one instance per store, created with defaults
/// at construction and patched in place, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub theme: ThemeSettings,
    /// ISO 639-1 language code.
    pub language: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Display pattern such as "MM/DD/YYYY".
    pub date_format: String,
    pub notifications: NotificationSettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            language: "en".into(),
            currency: "USD".into(),
            date_format: "MM/DD/YYYY".into(),
            notifications: NotificationSettings::default(),
        }
    }
}

/// Partial update for [`UserSettings`]. Fields merge shallowly: a present
/// `theme` or `notifications` replaces that whole nested record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub theme: Option<ThemeSettings>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub date_format: Option<String>,
    pub notifications: Option<NotificationSettings>,
}

impl SettingsPatch {
    pub(crate) fn apply_to(self, settings: &mut UserSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(currency) = self.currency {
            settings.currency = currency;
        }
        if let Some(date_format) = self.date_format {
            settings.date_format = date_format;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
    }
}
