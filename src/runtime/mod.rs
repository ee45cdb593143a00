pub mod session;

pub use session::{
    execute_session, persist_report, submit_session, usage_banner, RunTiming, SessionReport,
};
