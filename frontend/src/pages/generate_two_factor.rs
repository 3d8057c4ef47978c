use cofrap_shared::GenerateTwoFactor;
use cofrap_shared::workflow::USERNAME;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Card, CardSection, Input, QrCode};
use crate::hooks::use_workflow_form;

#[function_component(GenerateTwoFactorPage)]
pub fn generate_two_factor_page() -> Html {
    let form = use_workflow_form::<GenerateTwoFactor>();
    let show_manual_key = use_bool_toggle(false);
    let clipboard = use_clipboard();
    let state = form.controller();

    let toggle_manual_key = {
        let show_manual_key = show_manual_key.clone();
        Callback::from(move |_: MouseEvent| show_manual_key.toggle())
    };

    html! {
        <div class="space-y-6">
            <Card
                title="Activer l'Authentification à Deux Facteurs"
                description="Générez un code QR pour configurer l'authentification à deux facteurs avec Google Authenticator ou une application similaire."
            >
                <form onsubmit={form.onsubmit.clone()} class="space-y-6">
                    <Input
                        label="Nom d'utilisateur"
                        name={USERNAME}
                        value={form.value(USERNAME)}
                        oninput={form.oninput(USERNAME)}
                        error={form.field_error(USERNAME)}
                        placeholder="Entrez le nom d'utilisateur"
                        helper_text="L'utilisateur doit avoir été créé avec la fonction de génération de mot de passe"
                        required=true
                        autofocus=true
                    />

                    <Button button_type="submit" is_loading={state.is_loading()} class="w-full md:w-auto">
                        {"Générer le Code 2FA"}
                    </Button>
                </form>

                if let Some(error) = state.last_error() {
                    <div class="mt-6">
                        <Alert kind={AlertKind::Error}>{error.to_string()}</Alert>
                    </div>
                }

                if let Some(response) = state.last_response() {
                    <div class="mt-6 space-y-4">
                        <Alert kind={AlertKind::Success}>{response.message.clone()}</Alert>
                        <div class="pt-4 border-t border-gray-200">
                            <QrCode
                                data={response.qr_code_2fa_base64.clone()}
                                alt="QR Code pour Google Authenticator"
                                title="QR Code Google Authenticator"
                            />

                            <div class="mt-6 p-4 bg-gray-50 rounded-lg">
                                <div class="flex items-center justify-between mb-2">
                                    <span class="text-sm font-medium text-gray-700">{"Clé d'entrée manuelle"}</span>
                                    <button
                                        type="button"
                                        onclick={toggle_manual_key}
                                        aria-expanded={if *show_manual_key { "true" } else { "false" }}
                                        class="text-sm text-blue-600 hover:text-blue-700 font-medium"
                                    >
                                        {if *show_manual_key { "Masquer" } else { "Afficher" }}
                                    </button>
                                </div>
                                if *show_manual_key {
                                    <div class="flex items-center gap-2 mt-2">
                                        <code class="flex-1 px-3 py-2 bg-white border border-gray-300 rounded text-sm font-mono">
                                            {response.manual_entry_key.clone()}
                                        </code>
                                        <Button
                                            variant={ButtonVariant::Secondary}
                                            onclick={copy_key(&clipboard, &response.manual_entry_key)}
                                            class="px-4 py-2"
                                        >
                                            {"Copier"}
                                        </Button>
                                    </div>
                                    if *clipboard.copied {
                                        <p class="text-xs text-green-700 mt-2" role="status">
                                            {"Clé copiée dans le presse-papiers !"}
                                        </p>
                                    }
                                }
                                <p class="text-xs text-gray-600 mt-2">
                                    {"Utilisez cette clé si vous ne pouvez pas scanner le QR code"}
                                </p>
                            </div>

                            <div class="mt-4 p-4 bg-blue-50 border border-blue-200 rounded-lg">
                                <p class="text-sm text-blue-800">
                                    <strong>{"Instructions : "}</strong>
                                    {"Scannez le QR code avec votre application d'authentification \
                                      (Google Authenticator, Authy, Microsoft Authenticator, etc.). \
                                      Vous devrez ensuite utiliser le code à 6 chiffres généré pour vous authentifier."}
                                </p>
                            </div>
                        </div>
                    </div>
                }
            </Card>

            <Card title="À propos de l'authentification à deux facteurs">
                <div class="space-y-4 text-gray-700">
                    <CardSection title="Sécurité renforcée">
                        {"L'authentification à deux facteurs ajoute une couche supplémentaire de sécurité à votre compte. \
                          Même si quelqu'un obtient votre mot de passe, il ne pourra pas accéder à votre compte sans le code 2FA."}
                    </CardSection>
                    <CardSection title="Applications compatibles">
                        {"Vous pouvez utiliser n'importe quelle application d'authentification compatible avec TOTP : \
                          Google Authenticator, Authy, Microsoft Authenticator, 1Password, etc."}
                    </CardSection>
                    <CardSection title="Codes temporaires">
                        {"Les codes générés changent toutes les 30 secondes. \
                          Chaque code n'est valable qu'une seule fois."}
                    </CardSection>
                </div>
            </Card>
        </div>
    }
}

fn copy_key(clipboard: &UseClipboardHandle, key: &str) -> Callback<MouseEvent> {
    let clipboard = clipboard.clone();
    let key = key.to_string();
    Callback::from(move |_: MouseEvent| clipboard.write_text(key.clone()))
}
