//! Release pipeline planning.
//!
//! The CI runner asks for a plan once per build and follows it; branch names
//! are interpreted here and nowhere else.

use serde::Serialize;

/// Environment a branch deploys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Dev,
    Staging,
    Prod,
}

impl DeploymentTarget {
    /// `main` → prod, `develop` → dev, `release/*` → staging, anything else
    /// deploys nowhere.
    pub fn from_branch(branch: &str) -> Option<Self> {
        match branch {
            "main" => Some(Self::Prod),
            "develop" => Some(Self::Dev),
            b if b.starts_with("release/") => Some(Self::Staging),
            _ => None,
        }
    }

    pub fn namespace(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }

    pub fn tag_suffix(self) -> &'static str {
        match self {
            Self::Dev => "dev-latest",
            Self::Staging => "staging-latest",
            Self::Prod => "latest",
        }
    }

    pub fn requires_approval(self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    /// Fetch dependencies, check formatting, lint.
    InstallAndLint,
    Test,
    /// Every tag is applied to the one image.
    BuildImage { tags: Vec<String> },
    /// A failed scan is reported, never fatal, unless `blocking`.
    Scan { blocking: bool },
    /// Only planned for branches with a deployment target.
    Push { tags: Vec<String> },
    /// Rolls `image` out to `deployment` in `namespace`, after a manual
    /// approval when `requires_approval` is set.
    Deploy {
        namespace: String,
        deployment: String,
        image: String,
        requires_approval: bool,
    },
    /// Prunes local image artifacts. Always runs, whatever the earlier stages
    /// did.
    Cleanup,
}

/// Ordered stages for one build of one branch.
#[derive(Debug, Clone, Serialize)]
pub struct PipelinePlan {
    pub branch: String,
    pub target: Option<DeploymentTarget>,
    pub stages: Vec<Stage>,
}

impl PipelinePlan {
    /// `image_tag` identifies this build (the CI build number) and is the tag
    /// that gets deployed.
    pub fn for_branch(branch: &str, image_tag: &str, image: &str, deployment: &str) -> Self {
        let target = DeploymentTarget::from_branch(branch);

        let mut tags = vec![format!("{image}:{image_tag}")];
        if let Some(t) = target {
            tags.push(format!("{image}:{}", t.tag_suffix()));
        }

        let mut stages = vec![
            Stage::InstallAndLint,
            Stage::Test,
            Stage::BuildImage { tags: tags.clone() },
            Stage::Scan { blocking: false },
        ];

        if let Some(t) = target {
            stages.push(Stage::Push { tags });
            stages.push(Stage::Deploy {
                namespace: t.namespace().to_string(),
                deployment: deployment.to_string(),
                image: format!("{image}:{image_tag}"),
                requires_approval: t.requires_approval(),
            });
        }

        stages.push(Stage::Cleanup);

        Self {
            branch: branch.to_string(),
            target,
            stages,
        }
    }

    pub fn pushes(&self) -> bool {
        self.stages.iter().any(|s| matches!(s, Stage::Push { .. }))
    }
}
