use std::sync::mpsc::{
    channel, sync_channel, Receiver, Sender, SyncSender, TryRecvError, TrySendError,
};
use std::thread;

use crate::error::{HopmapError, Result};
use crate::graph::{AdjacencyList, DistanceMap, NodeId};

/// Perform BFS on a background worker fed through a bounded channel.
///
/// The caller seeds the channel with `root` and blocks on the completion
/// signal. The worker is the only consumer: it drains the channel in FIFO
/// order, pushes each newly discovered neighbour back onto it, and once the
/// channel is empty hands the finished map back over the completion channel.
///
/// Capacity is the node count. A node is sent at most once, so on a valid
/// graph the channel never fills; a full channel means the adjacency lists
/// reference nodes outside the graph and is reported instead of blocking.
pub fn channel_traverse<G>(graph: &G, root: NodeId) -> Result<DistanceMap>
where
    G: AdjacencyList + Sync + ?Sized,
{
    let (queue_tx, queue_rx) = sync_channel(graph.node_count().max(1));
    let (done_tx, done_rx) = channel();

    queue_tx
        .send(root)
        .map_err(|_| HopmapError::WorkerLost)?;

    thread::scope(|scope| {
        let worker = scope.spawn(move || drain(graph, root, &queue_rx, &queue_tx, &done_tx));

        let completion = done_rx.recv().map_err(|_| HopmapError::WorkerLost);
        if worker.join().is_err() {
            tracing::warn!("traversal worker panicked");
            return Err(HopmapError::WorkerLost);
        }
        completion?
    })
}

/// Worker loop: expand queued nodes until the queue is empty, then signal.
fn drain<G>(
    graph: &G,
    root: NodeId,
    queue_rx: &Receiver<NodeId>,
    queue_tx: &SyncSender<NodeId>,
    done_tx: &Sender<Result<DistanceMap>>,
) where
    G: AdjacencyList + ?Sized,
{
    let mut distances = DistanceMap::with_root(root);

    loop {
        let current = match queue_rx.try_recv() {
            Ok(node) => node,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        };

        let hops = distances.get(current).unwrap_or(0);
        for &neighbor in graph.neighbors(current) {
            if !distances.discover(neighbor, hops + 1) {
                continue;
            }
            match queue_tx.try_send(neighbor) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    let _ = done_tx.send(Err(HopmapError::Other(format!(
                        "node {current} lists {neighbor}, outside a graph of {} nodes",
                        graph.node_count()
                    ))));
                    return;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }

    // The caller may have stopped waiting; nothing else to do in that case.
    let _ = done_tx.send(Ok(distances));
}
