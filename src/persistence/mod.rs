pub mod files;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod tasks;

pub use files::{
    atomic_write, ensure_data_dir, init_local_data_dir, log_file, settings_file,
};
pub use seed::seed_demo_tasks;
pub use settings::{load_settings, save_settings, Settings};
pub use storage::{FileStorage, Storage};
pub use tasks::{read_stored_tasks, write_tasks, StoredTasks};
