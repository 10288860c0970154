// ============================================================================
// LangFill - English Message Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English console message definition
// 边界:
//   - ✅ English message strings definition
//   - ✅ Message key-value pairs maintenance
//   - ❌ Should not contain lookup logic
//   - ❌ Should not contain other language messages
//
// ============================================================================

/// English message table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // CLI related
    ("cli.missing_lang", "Please specify a language code"),
    ("cli.usage", "Usage: langfill <lang-code>"),
    ("cli.example", "Example: langfill jp"),
    // Generate related
    ("generate.start", "Filling \"{}\" translations from {}"),
    ("generate.found_keys", "Found {} total strings in {} files"),
    ("generate.pending_keys", "{} new strings need translation"),
    ("generate.files_scanned", "Scanned files:"),
    ("generate.pending_list", "Strings pending translation:"),
    ("generate.translated", "Translated \"{}\" to \"{}\""),
    (
        "generate.translation_failed",
        "Translation failed for \"{}\", keeping original text: {}",
    ),
    ("generate.nothing_to_translate", "Nothing new to translate"),
    ("generate.completed", "{} Translated {} strings, saved to {}"),
    (
        "generate.kept_original",
        "{} {} strings kept their original text",
    ),
    (
        "generate.dry_run_complete",
        "Dry run complete, {} strings would be translated",
    ),
    (
        "generate.missing_api_key",
        "Environment variable {} is not set, translation requests will fail",
    ),
    // Store related
    (
        "store.load_failed",
        "Could not load translations for \"{}\", starting from an empty table: {}",
    ),
    // Init related
    ("init.config_exists", "Config file already exists: {}"),
    ("init.use_force_hint", "Use --init --force to overwrite it"),
    ("init.config_created", "Config file created: {}"),
    ("init.create_failed", "Failed to create config file: {}"),
    // Errors
    ("error.read_source_file", "Failed to read source file: {}"),
    ("error.collect_failed", "Failed to collect source files under {}"),
    ("error.save_failed", "Failed to save translations for \"{}\""),
    (
        "error.translation_aborted",
        "Translation of \"{}\" failed, aborting without writing",
    ),
];
