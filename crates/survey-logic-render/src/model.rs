#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    /// `section` or `section/question`.
    pub path: String,
    /// Index into the node's rule list.
    pub dependency: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub survey_id: String,
    pub profile: String,
    pub sections_scanned: u32,
    pub questions_scanned: u32,
    pub dependencies_scanned: u32,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableQuestion {
    pub id: String,
    pub visible: bool,
    pub required: bool,
    pub skipped: bool,
    pub skip_to: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSection {
    pub id: String,
    pub visible: bool,
    pub skipped: bool,
    pub skip_to: Option<String>,
    pub questions: Vec<RenderableQuestion>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderablePlan {
    pub survey_id: String,
    pub sections: Vec<RenderableSection>,
    pub missing_required: Vec<String>,
}
