#[derive(Debug, Clone)]
pub enum Message {
    // === SEMESTER MESSAGES ===
    SemesterCreated(String),
    SemesterDeleted(i64),
    SemesterNotFound(i64),
    SemesterTitleEmpty,
    SemesterDatesInverted(String, String), // start, end

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskTitleEmpty,
    TaskScheduled(i64),
    TaskUnscheduled(i64),

    // === DUE DATE / SCHEDULE VALIDATION ===
    DueTimeWithoutDate,
    ScheduleIncomplete,
    ScheduleNotPositive,

    // === PREFERENCE MESSAGES ===
    SelectedSemesterSaved(String),
    SelectedSemesterCleared,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === STARTUP MESSAGES ===
    DbInitFailed(String),
    PreferencesInitFailed(String),

    // === RESET MESSAGES ===
    StoreReset,
}
