// ============================================================================
// LangSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English CLI message definitions
// 边界:
//   - ✅ English message strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Regeneration
    ("regenerate.command_run", "Running: :command"),
    ("regenerate.command_stdout", "Command output:\n:output"),
    ("regenerate.command_stderr", "Command errors:\n:output"),
    ("regenerate.success", "Translations regenerated in :seconds s"),
    (
        "regenerate.failed",
        "Translation generation failed (exit code :code)",
    ),
    (
        "regenerate.debug_hint",
        "Enable debug output (--debug) to see the command output",
    ),
    ("regenerate.error", "Could not run translation generation: :error"),
    // Watcher
    ("watch.start", "Watching language files, command: :command (debounce :debounce ms)"),
    ("watch.pattern", "  pattern: :pattern"),
    ("watch.attached", "Watching :count pattern(s) under :root"),
    ("watch.file_event", "File :kind: :path"),
    ("watch.reload_target", "Reload notifications go to :url"),
    ("watch.reload_failed", "Failed to notify dev server: :error"),
    ("watch.stopping", "Stopping watcher..."),
    ("watch.stopped", "Watcher stopped"),
    ("reload.logged", "Full reload requested"),
    // Generate
    ("generate.running", "Generating translations: :command"),
    // Locales
    ("locales.header", "Available locales (:count):"),
    ("locales.none", "No available locales configured"),
    ("locales.loaded", "translations loaded"),
    ("locales.not_loaded", "no translations"),
    (
        "locales.table_missing",
        "Translation table not found: :path (run `langsync generate` first)",
    ),
    // Lookup
    ("lookup.table_failed", "Failed to load translation table: :path"),
    // Init
    ("init.start", "Initializing configuration..."),
    ("init.config_exists", "Configuration file already exists: :path"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: :path"),
    (
        "init.next_steps",
        "Edit the [watch] section, then run `langsync watch`",
    ),
    ("init.create_failed", "Failed to create configuration file: :error"),
    // Errors
    ("error.root_not_exist", "Project root does not exist: :path"),
    ("error.signal_failed", "Failed to listen for Ctrl-C"),
    ("error.read_page", "Failed to read page data: :path"),
    ("error.parse_page", "Failed to parse page data: :path"),
];
