use crate::metaheuristic::aco::message::{Message, MessageInfo};

use csv::Writer;
use serde::Serialize;
use std::io::{Sink, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// Collects the messages of ants and colony.
///
/// Colony messages are summed up over `aggregation_rate` iterations and written as one
/// CSV row if a writer is attached. Single messages are only kept in memory after
/// [`Supervisor::with_history`].
pub struct Supervisor<W: Write, Ew> {
    pub sender: Sender<Message<Ew>>,
    receiver: Receiver<Message<Ew>>,
    ants: usize,
    history: Vec<Message<Ew>>,
    pending: Option<MessageInfo<Ew>>,
    pending_count: usize,
    aggregation_rate: usize,
    keep_history: bool,
    writer: Option<Writer<W>>,
}

impl<W: Write, Ew: Copy + Serialize> Supervisor<W, Ew> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        Self::with_writer(aggregation_rate, Some(writer))
    }

    fn with_writer(aggregation_rate: usize, writer: Option<Writer<W>>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            ants: 0,
            history: Vec::new(),
            pending: None,
            pending_count: 0,
            aggregation_rate: aggregation_rate.max(1),
            keep_history: false,
            writer,
        }
    }

    /// Keeps every received message, see [`Supervisor::history`].
    pub fn with_history(mut self) -> Self {
        self.keep_history = true;
        self
    }

    /// Hands out a sender and the id for the next ant of the current iteration.
    pub fn new_ant(&mut self) -> (Sender<Message<Ew>>, usize) {
        self.ants += 1;
        let id = self.ants;

        (self.sender.clone(), id)
    }

    /// Drains the channel, aggregating colony messages.
    pub fn aggregate_receive(&mut self) {
        let messages: Vec<_> = self.receiver.try_iter().collect();
        for message in messages {
            if message.is_colony() {
                self.aggregate(message.get_info());
            }
            if self.keep_history {
                self.history.push(message);
            }
        }
    }

    /// Collects the finished iteration and resets the ant ids.
    pub fn prepare_next(&mut self) {
        self.aggregate_receive();
        self.ants = 0;
    }

    /// Writes out a partially aggregated row, if any, and flushes the writer.
    pub fn finish(&mut self) {
        self.aggregate_receive();
        if let Some(info) = self.pending.take() {
            self.write_row(&info);
        }
        self.pending_count = 0;

        if let Some(writer) = self.writer.as_mut() {
            if let Err(error) = writer.flush() {
                log::warn!("supervisor.finish: flushing statistics failed: {}", error);
            }
        }
    }

    /// Messages received so far. Empty unless built [`Supervisor::with_history`].
    pub fn history(&self) -> &[Message<Ew>] {
        &self.history
    }

    /// Iterates the messages sent by ants, leaving out the colony summaries.
    pub fn iter_ant_messages(&self) -> impl Iterator<Item = &Message<Ew>> + '_ {
        self.history.iter().filter(|message| !message.is_colony())
    }

    pub fn iter_colony_messages(&self) -> impl Iterator<Item = &Message<Ew>> + '_ {
        self.history.iter().filter(|message| message.is_colony())
    }

    fn aggregate(&mut self, info: MessageInfo<Ew>) {
        match self.pending.as_mut() {
            Some(pending) => *pending += info,
            None => self.pending = Some(info),
        }
        self.pending_count += 1;

        if self.pending_count >= self.aggregation_rate {
            if let Some(row) = self.pending.take() {
                self.write_row(&row);
            }
            self.pending_count = 0;
        }
    }

    fn write_row(&mut self, row: &MessageInfo<Ew>) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(error) = writer.serialize(row) {
                log::warn!(
                    "supervisor.write: dropping statistics of iteration {}: {}",
                    row.iteration,
                    error
                );
            }
        }
    }
}

impl<Ew: Copy + Serialize> Default for Supervisor<Sink, Ew> {
    /// A supervisor that only keeps the history in memory.
    fn default() -> Self {
        Supervisor::with_writer(1, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn colony_message(iteration: usize, cost: i64) -> Message<i64> {
        Message::new(0, iteration, 4, 0, 1, Duration::from_micros(10), cost)
    }

    #[test]
    fn new_ant_works() {
        let mut supervisor = Supervisor::<Sink, i64>::default();
        let (_, first) = supervisor.new_ant();
        let (_, second) = supervisor.new_ant();
        supervisor.prepare_next();
        let (_, third) = supervisor.new_ant();

        assert_eq!((first, second, third), (1, 2, 1), "Ids restart every iteration.");
    }

    #[test]
    fn aggregate_receive_keeps_history() {
        let mut supervisor = Supervisor::<Sink, i64>::default().with_history();
        let (sender, id) = supervisor.new_ant();
        sender
            .send(Message::new(id, 0, 3, 0, 0, Duration::from_micros(5), 90))
            .unwrap();
        supervisor.sender.send(colony_message(0, 90)).unwrap();
        supervisor.prepare_next();

        assert_eq!(supervisor.history().len(), 2);
        assert_eq!(supervisor.iter_ant_messages().count(), 1);
        assert_eq!(supervisor.iter_colony_messages().count(), 1);
    }

    #[test]
    fn default_drops_single_messages() {
        let mut supervisor = Supervisor::<Sink, i64>::default();
        for iteration in 0..500 {
            for _ in 0..20 {
                let (sender, id) = supervisor.new_ant();
                sender
                    .send(Message::new(id, iteration, 3, 0, 0, Duration::from_micros(5), 90))
                    .unwrap();
            }
            supervisor.sender.send(colony_message(iteration, 90)).unwrap();
            supervisor.prepare_next();
        }
        supervisor.finish();

        assert!(
            supervisor.history().is_empty(),
            "Messages should only be kept on request."
        );
        assert!(supervisor.pending.is_none());
        assert_eq!(supervisor.receiver.try_iter().count(), 0);
    }

    #[test]
    fn writes_aggregated_rows() {
        let mut supervisor = Supervisor::new(2, Writer::from_writer(Vec::new()));
        for (iteration, cost) in [(1, 95), (2, 90), (3, 80)] {
            supervisor.sender.send(colony_message(iteration, cost)).unwrap();
            supervisor.prepare_next();
        }
        supervisor.finish();

        let writer = supervisor.writer.take().unwrap();
        let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(
            csv,
            "iteration,evaluations,fallbacks,n_improvements,cpu_time_us,cost\n\
             2,8,0,2,20,90\n\
             3,4,0,1,10,80\n"
        );
    }
}
