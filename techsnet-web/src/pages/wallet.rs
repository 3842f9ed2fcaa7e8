use crate::models::wallet::{Ledger, TransactionKind};
use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Demo wallet; the ledger lives only as long as the page.
#[function_component(WalletPage)]
pub fn wallet_page() -> Html {
    let (i18n, ..) = use_translation();
    let ledger = use_state(Ledger::default);
    let amount = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                amount.set(input.value());
            }
        })
    };

    let apply = |kind: TransactionKind| {
        let ledger = ledger.clone();
        let amount = amount.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*ledger).clone();
            let result = match kind {
                TransactionKind::Deposit => next.deposit(&amount, &today()),
                TransactionKind::Withdraw => next.withdraw(&amount, &today()),
            };
            match result {
                Ok(()) => {
                    ledger.set(next);
                    amount.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let rows = ledger.transactions.iter().map(|transaction| {
        let amount_class = if transaction.amount > 0 {
            "text-success"
        } else {
            "text-error"
        };
        html! {
            <tr>
                <td>{transaction.date.clone()}</td>
                <td>{transaction.kind.label()}</td>
                <td><span class="badge badge-success badge-outline">{transaction.status}</span></td>
                <td class={amount_class}>{transaction.signed_amount()}</td>
            </tr>
        }
    });

    html! {
        <div class="flex flex-col gap-6 max-w-3xl mx-auto">
            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <div class="text-sm text-base-content/70">{i18n.t("wallet.balance")}</div>
                    <div class="text-4xl font-bold">{format!("{} TNC", ledger.balance)}</div>
                    <div class="flex flex-wrap gap-2 mt-4">
                        <input
                            class="input input-bordered w-40"
                            type="number"
                            min="1"
                            placeholder={i18n.t("wallet.amount")}
                            value={(*amount).clone()}
                            oninput={on_amount}
                        />
                        <button class="btn btn-primary" onclick={apply(TransactionKind::Deposit)}>
                            {i18n.t("wallet.deposit")}
                        </button>
                        <button class="btn btn-outline" onclick={apply(TransactionKind::Withdraw)}>
                            {i18n.t("wallet.withdraw")}
                        </button>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error mt-2"><span>{message.clone()}</span></div>
                    }
                </div>
            </div>
            <div class="overflow-x-auto">
                <h2 class="text-xl mb-2">{i18n.t("wallet.transactions")}</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{i18n.t("wallet.date")}</th>
                            <th>{i18n.t("wallet.type")}</th>
                            <th>{i18n.t("wallet.status")}</th>
                            <th>{i18n.t("wallet.amount")}</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </div>
        </div>
    }
}
