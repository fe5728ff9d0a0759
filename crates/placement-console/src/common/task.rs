#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    SignIn,
    Registration,
    RecruiterLogin,
    Prediction,
    Redirect,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in ConsoleState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub sign_in: TaskState,
    pub registration: TaskState,
    pub recruiter_login: TaskState,
    pub prediction: TaskState,
    pub redirect: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::SignIn => &mut self.sign_in,
            TaskKind::Registration => &mut self.registration,
            TaskKind::RecruiterLogin => &mut self.recruiter_login,
            TaskKind::Prediction => &mut self.prediction,
            TaskKind::Redirect => &mut self.redirect,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.sign_in.is_running()
            || self.registration.is_running()
            || self.recruiter_login.is_running()
            || self.prediction.is_running()
            || self.redirect.is_running()
    }
}
