pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed values used by the dashboard and the
    //! one-shot commands, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for request completions flowing back to the UI loop.
    pub const COMPLETION_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // FORM CONFIGURATION
    // =============================================================================

    /// Subscription length pre-filled in the add-subscriber form.
    pub const DEFAULT_DURATION_DAYS: u32 = 30;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Currency shown next to the total revenue tile.
    pub const REVENUE_CURRENCY: &str = "UAH";

    /// Date format used for every timestamp in tables (e.g. `05.03.2024 14:07`).
    pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Backend origin used when the environment is set to `local`.
    pub const LOCAL_BACKEND_URL: &str = "http://localhost:8001";

    /// Environment variable holding the backend origin.
    pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

    // =============================================================================
    // NOTICE TEXT
    // =============================================================================

    pub mod notices {
        pub const MISSING_FIELDS: &str = "Please fill in all fields";
        pub const SUBSCRIBER_ADDED: &str = "Subscriber added successfully!";
        /// Shown when the server rejected the request without a message.
        pub const ADD_FAILED: &str = "Error adding subscriber";
        /// Shown when the request itself failed (network, non-2xx, bad body).
        pub const ADD_TRANSPORT_FAILED: &str = "Error adding subscriber. Please try again.";
        pub const BOT_CONTACT_REQUIRED: &str = "The user must have started the bot first by sending /start. \
             You can only add users who have already interacted with the bot.";
    }
}
