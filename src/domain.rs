mod lead;
mod lead_field;

pub use lead::{Lead, NewLead};
pub use lead_field::{LeadMessage, LeadName, LeadPhone};
