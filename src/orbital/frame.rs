//! The recurring frame task and its cancellation
//!
//! Each frame runs `Step -> Sync -> Pick -> Present` inside `Update`; Bevy's
//! render pass follows. Stopping the loop cancels a shared token: every frame
//! set stops running and the app is asked to exit.

use bevy::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Ordered stages of one simulation frame
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Advance body angles
    Step,
    /// Copy derived positions into transforms
    Sync,
    /// Resolve the pointer against the bodies and drive the tooltip
    Pick,
    /// End-of-frame bookkeeping before Bevy renders
    Present,
}

/// Shared cancellation flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Handle to the recurring per-frame task
#[derive(Resource, Debug, Default)]
pub struct FrameLoop {
    token: CancellationToken,
    frames: u64,
    exit_requested: bool,
}

impl FrameLoop {
    /// Cancel all future frames
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Token for cancelling from outside the ECS
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Run condition gating every frame set
pub fn frame_loop_running(frame_loop: Res<FrameLoop>) -> bool {
    frame_loop.is_running()
}

pub fn count_frame(mut frame_loop: ResMut<FrameLoop>) {
    frame_loop.frames += 1;
}

/// Ask the app to exit once the loop has been stopped
pub fn exit_on_stop(mut frame_loop: ResMut<FrameLoop>, mut exit: MessageWriter<AppExit>) {
    if frame_loop.is_running() || frame_loop.exit_requested {
        return;
    }
    frame_loop.exit_requested = true;
    info!("Frame loop stopped after {} frames", frame_loop.frames);
    exit.write(AppExit::Success);
}
