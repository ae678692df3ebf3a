use super::*;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::collections::VecDeque;

struct Envelope {
    tag: Tag,
    value: f64,
    ack: Sender<()>,
}

/// Completion handle for a `ChannelComm::isend`.
/// Completes once the destination has received the message.
#[derive(Debug)]
pub struct ChannelRequest {
    dest: usize,
    ack: Receiver<()>,
}

/// In-process communicator, one per rank.
///
/// Every ordered (source, destination) pair, self loops included, gets its
/// own unbounded FIFO channel, so messages between two ranks arrive in
/// posting order. Dropping a `ChannelComm` disconnects its channels and
/// peers see a transport failure instead of blocking forever.
pub struct ChannelComm {
    rank: usize,
    outboxes: Vec<Sender<Envelope>>,
    inboxes: Vec<Receiver<Envelope>>,
    /// Messages that arrived with a tag nobody asked for yet, per source.
    pending: Vec<VecDeque<Envelope>>,
}

/// Build a fully connected set of `size` communicators, indexed by rank.
pub fn channel_ring(size: usize) -> Vec<ChannelComm> {
    // links[source][dest]
    let mut senders: Vec<Vec<Sender<Envelope>>> = Vec::with_capacity(size);
    let mut receivers: Vec<Vec<Option<Receiver<Envelope>>>> =
        (0..size).map(|_| (0..size).map(|_| None).collect()).collect();
    for source in 0..size {
        let mut row = Vec::with_capacity(size);
        for dest in 0..size {
            let (s, r) = unbounded();
            row.push(s);
            receivers[dest][source] = Some(r);
        }
        senders.push(row);
    }

    senders
        .into_iter()
        .zip(receivers)
        .enumerate()
        .map(|(rank, (outboxes, inboxes))| ChannelComm {
            rank,
            outboxes,
            inboxes: inboxes.into_iter().flatten().collect(),
            pending: (0..size).map(|_| VecDeque::new()).collect(),
        })
        .collect()
}

impl ChannelComm {
    fn check_peer(&self, peer: usize) -> Result<()> {
        if peer >= self.outboxes.len() {
            return Err(HeatError::transport(
                peer,
                format!("no such rank in a ring of {}", self.outboxes.len()),
            ));
        }
        Ok(())
    }

    fn take_pending(&mut self, source: usize, tag: Tag) -> Option<Envelope> {
        let queue = &mut self.pending[source];
        let position = queue.iter().position(|e| e.tag == tag)?;
        queue.remove(position)
    }
}

fn deliver(envelope: Envelope) -> f64 {
    // The sender may have dropped its request without waiting.
    let _ = envelope.ack.send(());
    envelope.value
}

impl Communicator for ChannelComm {
    type Request = ChannelRequest;

    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.outboxes.len()
    }

    fn isend(&mut self, value: f64, dest: usize, tag: Tag) -> Result<ChannelRequest> {
        self.check_peer(dest)?;
        let (ack_sender, ack) = bounded(1);
        let envelope = Envelope {
            tag,
            value,
            ack: ack_sender,
        };
        self.outboxes[dest]
            .send(envelope)
            .map_err(|_| HeatError::transport(dest, "peer is gone, send failed"))?;
        Ok(ChannelRequest { dest, ack })
    }

    fn recv(&mut self, source: usize, tag: Tag) -> Result<f64> {
        self.check_peer(source)?;
        if let Some(envelope) = self.take_pending(source, tag) {
            return Ok(deliver(envelope));
        }
        loop {
            let envelope = self.inboxes[source].recv().map_err(|_| {
                HeatError::transport(source, "peer is gone, receive failed")
            })?;
            if envelope.tag == tag {
                return Ok(deliver(envelope));
            }
            self.pending[source].push_back(envelope);
        }
    }

    fn wait(&mut self, request: ChannelRequest) -> Result<()> {
        request.ack.recv().map_err(|_| {
            HeatError::transport(
                request.dest,
                "peer dropped before receiving a posted send",
            )
        })
    }
}
