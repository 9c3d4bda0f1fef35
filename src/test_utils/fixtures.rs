//! Sample mapping files.

use crate::constants::DEFAULT_MAPPING_FILE;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for creating sample `comet.yaml` files
#[derive(Clone, Debug)]
pub struct MappingFixture {
    pub content: String,
    pub name: String,
}

impl MappingFixture {
    /// Serverless operator images, with one RHEL 9 target
    pub fn serverless() -> Self {
        Self {
            name: "serverless".to_string(),
            content: r#"
- to: openshift-serverless-1/serverless-rhel8-operator
  from:
  - name: serverless-kn-operator
    repo: serverless-operator-135/serverless-kn-operator
- to: openshift-serverless-1/serving-activator-rhel8
  from:
  - name: kn-serving-activator
    repo: serverless-operator-135/kn-serving-activator
- to: openshift-serverless-1/serving-autoscaler-rhel8
  from:
  - name: kn-serving-autoscaler
    repo: serverless-operator-135/kn-serving-autoscaler
- to: openshift-serverless-1/serving-webhook-rhel8
  from:
  - name: kn-serving-webhook
    repo: serverless-operator-135/kn-serving-webhook
- to: openshift-serverless-1/eventing-controller-rhel8
  from:
  - name: kn-eventing-controller
    repo: serverless-operator-135/kn-eventing-controller
- to: openshift-serverless-1/eventing-in-memory-channel-controller-rhel8
  from:
  - name: kn-eventing-channel-controller
    repo: serverless-operator-135/kn-eventing-channel-controller
- to: openshift-serverless-1/eventing-in-memory-channel-dispatcher-rhel8
  from:
  - name: kn-eventing-channel-dispatcher
    repo: serverless-operator-135/kn-eventing-channel-dispatcher
- to: openshift-serverless-1/ingress-rhel9
  from:
  - name: kn-ingress
    repo: serverless-operator-135/kn-ingress
"#
            .trim_start()
            .to_string(),
        }
    }

    /// A single target with no candidates yet
    pub fn single_target(target: &str) -> Self {
        Self {
            name: "single_target".to_string(),
            content: format!("- to: {target}\n  from: []\n"),
        }
    }

    /// An existing but empty mapping file
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            content: String::new(),
        }
    }

    /// Write the fixture as `comet.yaml` in `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(DEFAULT_MAPPING_FILE);
        fs::write(&path, &self.content)?;
        Ok(path)
    }

    /// Write the fixture into a fresh temporary directory
    pub fn write_temp(&self) -> Result<(TempDir, PathBuf)> {
        let temp = TempDir::new()?;
        let path = self.write_to(temp.path())?;
        Ok((temp, path))
    }
}
