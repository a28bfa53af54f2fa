//! Request sequencing.
//!
//! Every issued request takes a ticket from a per-class counter. A response is
//! applied only while its ticket is still the latest one of its class, so a
//! slow page request cannot overwrite the result of a newer filter request.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    Layout,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub class: RequestClass,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFence {
    layout: u64,
    data: u64,
}

impl RequestFence {
    pub fn issue(&mut self, class: RequestClass) -> Ticket {
        let counter = self.counter_mut(class);
        *counter += 1;
        Ticket {
            class,
            seq: *counter,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        let latest = match ticket.class {
            RequestClass::Layout => self.layout,
            RequestClass::Data => self.data,
        };
        ticket.seq == latest
    }

    fn counter_mut(&mut self, class: RequestClass) -> &mut u64 {
        match class {
            RequestClass::Layout => &mut self.layout,
            RequestClass::Data => &mut self.data,
        }
    }
}
