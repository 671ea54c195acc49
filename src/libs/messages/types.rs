/// Every user-facing message the application prints or logs.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseOpened(String),     // location
    InMemoryDatabase,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate(u32, u32), // current, latest

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted(u32),  // new version
    SeedingDatabase,
    SeedSkippedExistingLists(i64), // existing list count
    SeedCompleted(usize, usize),   // lists, items

    // === LIST MESSAGES ===
    ListsHeader,
    NoListsFound,
    NoOpenItems,
    ListNotFound(i64),
    ListTitleRequired,

    // === ITEM MESSAGES ===
    ItemTextRequired,
    ItemListMissing(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigInvalidPort(String),

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerStopped,
    InternalServerError,
}
