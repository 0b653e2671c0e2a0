use super::entity::LocationEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Standard questions shown on every city page, phrased for that city.
pub fn default_faqs(entry: &LocationEntry) -> Vec<FaqItem> {
    let city = &entry.city;
    let state = &entry.state;
    let transit = if entry.transit_estimate.trim().is_empty() {
        "a few working days"
    } else {
        entry.transit_estimate.as_str()
    };

    vec![
        FaqItem {
            question: format!(
                "What is the minimum order quantity for bulk tea delivery in {city}?"
            ),
            answer: format!(
                "We deliver bulk CTC tea starting from 50kg per order across {city}, {state}. \
                 For first-time buyers, we can arrange smaller trial quantities to verify \
                 quality before committing to regular orders."
            ),
        },
        FaqItem {
            question: format!("How long does bulk tea delivery take to {city}?"),
            answer: format!(
                "Standard delivery to {city} takes {transit} from order confirmation. \
                 Delivery times may vary based on specific locality and order volume."
            ),
        },
        FaqItem {
            question: format!("Do you provide GST invoices for bulk tea purchases in {city}?"),
            answer: format!(
                "Yes, all bulk tea orders include proper GST invoices with HSN code 0902 for \
                 tea. This is essential for businesses in {city} claiming input tax credit. \
                 We also provide delivery challans and quality certificates on request."
            ),
        },
        FaqItem {
            question: format!(
                "Which tea grade is best for high-volume chai service in {city}?"
            ),
            answer: format!(
                "For businesses in {city} serving high volumes, we typically recommend BOP \
                 (Broken Orange Pekoe) or medium CTC grades that brew quickly while \
                 maintaining consistent taste across batches. Our team can suggest the right \
                 grade based on your specific brewing method and water quality."
            ),
        },
    ]
}
