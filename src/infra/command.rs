use tokio::io::{AsyncBufReadExt, BufReader};

/// The captured result of a subordinate process: its exit status (or the
/// spawn error) together with the full contents of both output streams.
/// stdout and stderr are kept strictly separate, since only stdout ever
/// participates in the expectation comparison.
///
/// 子进程的捕获结果：退出状态（或启动错误）以及两个输出流的完整内容。
/// stdout 和 stderr 严格分开保存，因为只有 stdout 参与期望值比较。
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: std::io::Result<std::process::ExitStatus>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    fn spawn_failed(err: std::io::Error) -> Self {
        Self {
            status: Err(err),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Spawns a command and captures stdout and stderr into separate buffers.
/// The two streams are read concurrently while the process runs, then the
/// call waits synchronously for completion — there is no timeout here; the
/// caller decides whether to wrap the future in one.
///
/// 派生一个命令，并将 stdout 和 stderr 捕获到各自的缓冲区中。
/// 进程运行期间两个流被并发读取，随后同步等待进程结束——
/// 这里没有超时；是否包一层超时由调用方决定。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> CapturedOutput {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, the error travels back in `status`.
            // 如果派生失败，错误会通过 `status` 返回。
            return CapturedOutput::spawn_failed(e);
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return CapturedOutput::spawn_failed(std::io::Error::other(
                "failed to capture child stdout",
            ));
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return CapturedOutput::spawn_failed(std::io::Error::other(
                "failed to capture child stderr",
            ));
        }
    };

    // Read both streams line by line in parallel so neither pipe can fill
    // up and block the child while we wait on the other one.
    // 并行逐行读取两个流，以免其中一个管道填满后
    // 在等待另一个流时阻塞子进程。
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        let mut buf = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    });
    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        let mut buf = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    });

    // Wait for the process to exit, then for the reader tasks, so that all
    // output produced before exit is captured.
    // 等待进程退出，然后等待读取任务，确保退出前产生的所有输出都被捕获。
    let status = child.wait().await;

    let stdout = match stdout_handle.await {
        Ok(buf) => buf,
        Err(e) => {
            eprintln!("Failed to join stdout task: {}", e);
            String::new()
        }
    };
    let stderr = match stderr_handle.await {
        Ok(buf) => buf,
        Err(e) => {
            eprintln!("Failed to join stderr task: {}", e);
            String::new()
        }
    };

    CapturedOutput {
        status,
        stdout,
        stderr,
    }
}
