/// What the supervisor does after the child exits.
///
/// Any non-zero exit code schedules exactly one relaunch after the fixed
/// restart delay. A zero code is a clean stop. A missing code means the
/// child was killed by a signal, which is treated as a deliberate stop as
/// well. There is no retry cap: a child that keeps failing is relaunched
/// forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
    Restart,
    Stop,
}

impl RestartDecision {
    pub fn for_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) | None => RestartDecision::Stop,
            Some(_) => RestartDecision::Restart,
        }
    }

    pub fn should_restart(&self) -> bool {
        matches!(self, RestartDecision::Restart)
    }
}
