// ── Wire ↔ domain conversions ──
//
// All mapping between `rently-api` response/upsert shapes and the
// canonical domain types lives here, so endpoint quirks (ids vs expanded
// references, raw status codes) stay out of the rest of the crate.

use rently_api::types as wire;

use crate::model::{
    DashboardStats, EntityId, Guest, Home, HomeContract, HomeOwner, InvoicePayment, MevBlock,
    MevTransaction, Receiver, Service, ServiceContract, UserProfile,
};
use crate::requests::{
    CreateGuestRequest, CreateHomeContractRequest, CreateHomeOwnerRequest,
    CreateInvoicePaymentRequest, CreateHomeRequest, CreateReceiverRequest,
    CreateServiceContractRequest, CreateServiceRequest, UpdateGuestRequest,
    UpdateHomeContractRequest, UpdateHomeOwnerRequest, UpdateHomeRequest,
    UpdateInvoicePaymentRequest, UpdateReceiverRequest, UpdateServiceContractRequest,
    UpdateServiceRequest,
};

// ── Responses → domain ─────────────────────────────────────────────

impl From<wire::GuestResponse> for Guest {
    fn from(r: wire::GuestResponse) -> Self {
        Self {
            id: EntityId::Numeric(r.id),
            full_name: r.full_name,
            phone: r.phone,
            email: r.email,
            citizen_id: r.citizen_id,
            address: r.address,
            note: r.note,
            created_at: r.created_at,
        }
    }
}

impl From<wire::HomeOwnerResponse> for HomeOwner {
    fn from(r: wire::HomeOwnerResponse) -> Self {
        Self {
            id: EntityId::Numeric(r.id),
            full_name: r.full_name,
            phone: r.phone,
            email: r.email,
            address: r.address,
            bank_account: r.bank_account,
            bank_name: r.bank_name,
        }
    }
}

impl From<wire::HomeResponse> for Home {
    fn from(r: wire::HomeResponse) -> Self {
        // Prefer the expanded owner's id when only the object was sent.
        let owner = r.owner.map(HomeOwner::from);
        let owner_id = r
            .owner_id
            .map(EntityId::Numeric)
            .or_else(|| owner.as_ref().map(|o| o.id.clone()));

        Self {
            id: EntityId::Numeric(r.id),
            name: r.name,
            address: r.address,
            owner_id,
            owner,
            room_count: r.room_count,
            base_price: r.base_price,
            status: r.status,
            note: r.note,
        }
    }
}

impl From<wire::HomeContractResponse> for HomeContract {
    fn from(r: wire::HomeContractResponse) -> Self {
        let home = r.home.map(Home::from);
        let home_id = r
            .home_id
            .map(EntityId::Numeric)
            .or_else(|| home.as_ref().map(|h| h.id.clone()));
        let guest = r.guest.map(Guest::from);
        let guest_id = r
            .guest_id
            .map(EntityId::Numeric)
            .or_else(|| guest.as_ref().map(|g| g.id.clone()));

        Self {
            id: EntityId::Numeric(r.id),
            home_id,
            home,
            guest_id,
            guest,
            start_date: r.start_date,
            end_date: r.end_date,
            rent_amount: r.rent_amount,
            deposit_amount: r.deposit_amount,
            payment_cycle: r.payment_cycle,
            status: r.status.into(),
            note: r.note,
        }
    }
}

impl From<wire::ServiceContractResponse> for ServiceContract {
    fn from(r: wire::ServiceContractResponse) -> Self {
        let home_contract = r.home_contract.map(|c| Box::new(HomeContract::from(c)));
        let home_contract_id = r
            .home_contract_id
            .map(EntityId::Numeric)
            .or_else(|| home_contract.as_ref().map(|c| c.id.clone()));
        let service = r.service.map(Service::from);
        let service_id = r
            .service_id
            .map(EntityId::Numeric)
            .or_else(|| service.as_ref().map(|s| s.id.clone()));

        Self {
            id: EntityId::Numeric(r.id),
            home_contract_id,
            home_contract,
            service_id,
            service,
            price: r.price,
            start_date: r.start_date,
            end_date: r.end_date,
            payment_cycle: r.payment_cycle,
            status: r.status.into(),
        }
    }
}

impl From<wire::ServiceResponse> for Service {
    fn from(r: wire::ServiceResponse) -> Self {
        Self {
            id: EntityId::Numeric(r.id),
            name: r.name,
            unit: r.unit,
            price: r.price,
            note: r.note,
        }
    }
}

impl From<wire::ReceiverResponse> for Receiver {
    fn from(r: wire::ReceiverResponse) -> Self {
        Self {
            id: EntityId::Numeric(r.id),
            full_name: r.full_name,
            phone: r.phone,
            bank_account: r.bank_account,
            bank_name: r.bank_name,
            note: r.note,
        }
    }
}

impl From<wire::InvoicePaymentResponse> for InvoicePayment {
    fn from(r: wire::InvoicePaymentResponse) -> Self {
        let receiver = r.receiver.map(Receiver::from);
        let receiver_id = r
            .receiver_id
            .map(EntityId::Numeric)
            .or_else(|| receiver.as_ref().map(|x| x.id.clone()));

        Self {
            id: EntityId::Numeric(r.id),
            home_contract_id: r.home_contract_id.map(EntityId::Numeric),
            service_contract_id: r.service_contract_id.map(EntityId::Numeric),
            amount: r.amount,
            due_date: r.due_date,
            paid_date: r.paid_date,
            status: r.status.into(),
            receiver_id,
            receiver,
            note: r.note,
        }
    }
}

impl From<wire::UserProfileResponse> for UserProfile {
    fn from(r: wire::UserProfileResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            username: r.username,
            full_name: r.full_name,
            email: r.email,
            role: r.role,
        }
    }
}

impl From<wire::DashboardStatsResponse> for DashboardStats {
    fn from(r: wire::DashboardStatsResponse) -> Self {
        Self {
            home_count: r.home_count,
            guest_count: r.guest_count,
            active_contract_count: r.active_contract_count,
            expiring_contract_count: r.expiring_contract_count,
            unpaid_invoice_count: r.unpaid_invoice_count,
            revenue_this_month: r.revenue_this_month,
            revenue_this_year: r.revenue_this_year,
        }
    }
}

impl From<wire::MevBlockResponse> for MevBlock {
    fn from(r: wire::MevBlockResponse) -> Self {
        Self {
            number: r.number,
            hash: r.hash,
            timestamp: r.timestamp,
            transaction_count: r.transaction_count,
            mev_transaction_count: r.mev_transaction_count,
            profit_eth: r.profit_eth,
        }
    }
}

impl From<wire::MevTransactionResponse> for MevTransaction {
    fn from(r: wire::MevTransactionResponse) -> Self {
        Self {
            hash: r.hash,
            block_number: r.block_number,
            kind: r.kind,
            protocol: r.protocol,
            from: r.from,
            to: r.to,
            profit_eth: r.profit_eth,
            cost_eth: r.cost_eth,
        }
    }
}

// ── Requests → upserts ─────────────────────────────────────────────

impl From<CreateGuestRequest> for wire::GuestUpsert {
    fn from(req: CreateGuestRequest) -> Self {
        Self {
            full_name: Some(req.full_name),
            phone: req.phone,
            email: req.email,
            citizen_id: req.citizen_id,
            address: req.address,
            note: req.note,
        }
    }
}

impl From<UpdateGuestRequest> for wire::GuestUpsert {
    fn from(req: UpdateGuestRequest) -> Self {
        Self {
            full_name: req.full_name,
            phone: req.phone,
            email: req.email,
            citizen_id: req.citizen_id,
            address: req.address,
            note: req.note,
        }
    }
}

impl From<CreateHomeOwnerRequest> for wire::HomeOwnerUpsert {
    fn from(req: CreateHomeOwnerRequest) -> Self {
        Self {
            full_name: Some(req.full_name),
            phone: req.phone,
            email: req.email,
            address: req.address,
            bank_account: req.bank_account,
            bank_name: req.bank_name,
        }
    }
}

impl From<UpdateHomeOwnerRequest> for wire::HomeOwnerUpsert {
    fn from(req: UpdateHomeOwnerRequest) -> Self {
        Self {
            full_name: req.full_name,
            phone: req.phone,
            email: req.email,
            address: req.address,
            bank_account: req.bank_account,
            bank_name: req.bank_name,
        }
    }
}

impl From<CreateHomeRequest> for wire::HomeUpsert {
    fn from(req: CreateHomeRequest) -> Self {
        Self {
            name: Some(req.name),
            address: req.address,
            owner_id: req.owner_id,
            room_count: req.room_count,
            base_price: req.base_price,
            status: None,
            note: req.note,
        }
    }
}

impl From<UpdateHomeRequest> for wire::HomeUpsert {
    fn from(req: UpdateHomeRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            owner_id: req.owner_id,
            room_count: req.room_count,
            base_price: req.base_price,
            status: req.status,
            note: req.note,
        }
    }
}

impl From<CreateHomeContractRequest> for wire::HomeContractUpsert {
    fn from(req: CreateHomeContractRequest) -> Self {
        Self {
            home_id: Some(req.home_id),
            guest_id: Some(req.guest_id),
            start_date: Some(req.start_date),
            end_date: req.end_date,
            rent_amount: Some(req.rent_amount),
            deposit_amount: req.deposit_amount,
            payment_cycle: req.payment_cycle,
            status: None,
            note: req.note,
        }
    }
}

impl From<UpdateHomeContractRequest> for wire::HomeContractUpsert {
    fn from(req: UpdateHomeContractRequest) -> Self {
        Self {
            home_id: None,
            guest_id: None,
            start_date: req.start_date,
            end_date: req.end_date,
            rent_amount: req.rent_amount,
            deposit_amount: req.deposit_amount,
            payment_cycle: req.payment_cycle,
            status: req.status.map(i32::from),
            note: req.note,
        }
    }
}

impl From<CreateServiceContractRequest> for wire::ServiceContractUpsert {
    fn from(req: CreateServiceContractRequest) -> Self {
        Self {
            home_contract_id: Some(req.home_contract_id),
            service_id: Some(req.service_id),
            price: req.price,
            start_date: req.start_date,
            end_date: req.end_date,
            payment_cycle: req.payment_cycle,
            status: None,
        }
    }
}

impl From<UpdateServiceContractRequest> for wire::ServiceContractUpsert {
    fn from(req: UpdateServiceContractRequest) -> Self {
        Self {
            home_contract_id: None,
            service_id: None,
            price: req.price,
            start_date: req.start_date,
            end_date: req.end_date,
            payment_cycle: req.payment_cycle,
            status: req.status.map(i32::from),
        }
    }
}

impl From<CreateServiceRequest> for wire::ServiceUpsert {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            name: Some(req.name),
            unit: req.unit,
            price: Some(req.price),
            note: req.note,
        }
    }
}

impl From<UpdateServiceRequest> for wire::ServiceUpsert {
    fn from(req: UpdateServiceRequest) -> Self {
        Self {
            name: req.name,
            unit: req.unit,
            price: req.price,
            note: req.note,
        }
    }
}

impl From<CreateReceiverRequest> for wire::ReceiverUpsert {
    fn from(req: CreateReceiverRequest) -> Self {
        Self {
            full_name: Some(req.full_name),
            phone: req.phone,
            bank_account: req.bank_account,
            bank_name: req.bank_name,
            note: req.note,
        }
    }
}

impl From<UpdateReceiverRequest> for wire::ReceiverUpsert {
    fn from(req: UpdateReceiverRequest) -> Self {
        Self {
            full_name: req.full_name,
            phone: req.phone,
            bank_account: req.bank_account,
            bank_name: req.bank_name,
            note: req.note,
        }
    }
}

impl From<CreateInvoicePaymentRequest> for wire::InvoicePaymentUpsert {
    fn from(req: CreateInvoicePaymentRequest) -> Self {
        Self {
            home_contract_id: req.home_contract_id,
            service_contract_id: req.service_contract_id,
            amount: Some(req.amount),
            due_date: req.due_date,
            paid_date: None,
            status: None,
            receiver_id: req.receiver_id,
            note: req.note,
        }
    }
}

impl From<UpdateInvoicePaymentRequest> for wire::InvoicePaymentUpsert {
    fn from(req: UpdateInvoicePaymentRequest) -> Self {
        Self {
            home_contract_id: None,
            service_contract_id: None,
            amount: req.amount,
            due_date: req.due_date,
            paid_date: req.paid_date,
            status: req.status.map(i32::from),
            receiver_id: req.receiver_id,
            note: req.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractStatus;

    #[test]
    fn expanded_owner_backfills_owner_id() {
        let home = Home::from(wire::HomeResponse {
            id: 3,
            name: "Căn hộ Q7".into(),
            address: None,
            owner_id: None,
            owner: Some(wire::HomeOwnerResponse {
                id: 11,
                full_name: "Lê Văn Chín".into(),
                phone: None,
                email: None,
                address: None,
                bank_account: None,
                bank_name: None,
            }),
            room_count: None,
            base_price: None,
            status: None,
            note: None,
        });

        assert_eq!(home.owner_id, Some(EntityId::Numeric(11)));
    }

    #[test]
    fn contract_status_code_maps_to_enum() {
        let contract = HomeContract::from(wire::HomeContractResponse {
            id: 1,
            home_id: Some(2),
            home: None,
            guest_id: Some(3),
            guest: None,
            start_date: None,
            end_date: None,
            rent_amount: 5_000_000,
            deposit_amount: None,
            payment_cycle: Some(1),
            status: 1,
            note: None,
        });

        assert_eq!(contract.status, ContractStatus::Active);
        assert_eq!(contract.home_id, Some(EntityId::Numeric(2)));
    }

    #[test]
    fn update_request_serializes_only_changed_fields() {
        let upsert = wire::GuestUpsert::from(UpdateGuestRequest {
            phone: Some("0909000111".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&upsert).expect("serializable");

        assert_eq!(json, serde_json::json!({ "phone": "0909000111" }));
    }
}
