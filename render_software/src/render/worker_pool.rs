use crate::error::*;

///
/// Runs independent rendering tasks, on a set of rayon threads when the `multithreading` feature is enabled
///
/// The pool is created once and passed to whatever needs it, so several renders can share the same threads.
///
pub struct WorkerPool {
    #[cfg(feature="multithreading")]
    pool: rayon::ThreadPool,
}

#[cfg(feature="multithreading")]
impl WorkerPool {
    ///
    /// Creates a worker pool with the specified number of threads (or rayon's default number of threads if None)
    ///
    pub fn new(num_threads: Option<usize>) -> Result<WorkerPool, RenderError> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|idx| format!("flo_svg_render worker {}", idx));

        if let Some(num_threads) = num_threads {
            builder = builder.num_threads(num_threads);
        }

        let pool = builder.build().map_err(|err| RenderError::WorkerPool(err.to_string()))?;

        Ok(WorkerPool { pool })
    }

    ///
    /// The number of threads that will run tasks
    ///
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    ///
    /// Runs `num_tasks` tasks, returning the results in task order once they have all completed
    ///
    pub fn run_tasks<TResult, TTask>(&self, num_tasks: usize, task: TTask) -> Vec<TResult>
    where
        TResult:    Send,
        TTask:      Sync + Fn(usize) -> TResult,
    {
        use rayon::prelude::*;

        self.pool.install(|| {
            (0..num_tasks).into_par_iter()
                .map(|task_idx| task(task_idx))
                .collect()
        })
    }
}

#[cfg(not(feature="multithreading"))]
impl WorkerPool {
    ///
    /// Creates a worker pool (tasks run on the calling thread when the `multithreading` feature is disabled)
    ///
    pub fn new(_num_threads: Option<usize>) -> Result<WorkerPool, RenderError> {
        Ok(WorkerPool { })
    }

    ///
    /// The number of threads that will run tasks
    ///
    pub fn num_threads(&self) -> usize {
        1
    }

    ///
    /// Runs `num_tasks` tasks, returning the results in task order
    ///
    pub fn run_tasks<TResult, TTask>(&self, num_tasks: usize, task: TTask) -> Vec<TResult>
    where
        TResult:    Send,
        TTask:      Sync + Fn(usize) -> TResult,
    {
        (0..num_tasks)
            .map(|task_idx| task(task_idx))
            .collect()
    }
}
