// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered task trees for installation phases.
//!
//! A [`Task`] runs its own handler and then, when `run_sub_tasks` is set, each
//! of its children in declaration order. The first failure stops the walk;
//! resources applied by earlier tasks are left in place.

use crate::error::{KarmadaError, Result};
use futures::future::BoxFuture;
use tracing::{debug, info};

/// Handler of a task
pub type RunFn<D> = for<'a> fn(&'a D) -> BoxFuture<'a, Result<()>>;

pub struct Task<D> {
    pub name: &'static str,
    pub run: Option<RunFn<D>>,
    pub run_sub_tasks: bool,
    pub tasks: Vec<Task<D>>,
}

impl<D: Sync> Task<D> {
    pub fn new(name: &'static str, run: RunFn<D>) -> Self {
        Self {
            name,
            run: Some(run),
            run_sub_tasks: false,
            tasks: Vec::new(),
        }
    }

    /// Attach children that run after this task's own handler
    pub fn with_sub_tasks(mut self, tasks: Vec<Task<D>>) -> Self {
        self.run_sub_tasks = true;
        self.tasks = tasks;
        self
    }

    /// Names of this task's direct children, in execution order
    pub fn sub_task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name).collect()
    }

    /// Run the task and its children against `data`
    pub fn run<'a>(&'a self, data: &'a D) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if let Some(run) = self.run {
                debug!("[{}] running task", self.name);
                run(data).await.map_err(|e| KarmadaError::TaskFailed {
                    task: self.name.to_string(),
                    source: Box::new(e),
                })?;
            }

            if self.run_sub_tasks {
                for task in &self.tasks {
                    task.run(data).await?;
                }
            }

            info!("[{}] task completed", self.name);
            Ok(())
        })
    }
}
